//! Drives the full apply → poll → exec → delete sequence against a scripted
//! fake kubectl that keeps cluster state in a tempdir: `get` reports a
//! Pending phase for the first polls and Running afterwards, `exec` runs the
//! trailing command locally, `delete` forgets the resource.

#![cfg(unix)]

use kubeshell::api::Kubectl;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

const MANIFEST: &str = "\
apiVersion: v1
kind: Pod
metadata:
  name: {{ Name }}
  labels:
    app: {{ Name }}
spec:
  containers:
    - name: nginx
      image: nginx:latest
";

fn fake_cluster(dir: &Path) -> String {
    let program = dir.join("kubectl");
    let state = dir.display();
    let script = format!(
        r#"#!/bin/sh
case "$1" in
  apply)
    cat > '{state}/live.yaml'
    echo 'pod/foo created'
    ;;
  get)
    if [ ! -f '{state}/live.yaml' ]; then
      echo 'Error from server (NotFound): pods "foo" not found' >&2
      exit 1
    fi
    n=0
    [ -f '{state}/polls' ] && n=$(cat '{state}/polls')
    echo $((n + 1)) > '{state}/polls'
    if [ "$n" -ge 2 ]; then
      printf '{{"status":{{"phase":"Running"}}}}'
    else
      printf '{{"status":{{"phase":"Pending"}}}}'
    fi
    ;;
  exec)
    shift 4
    "$@"
    ;;
  delete)
    if [ ! -f '{state}/live.yaml' ]; then
      echo 'Error from server (NotFound): pods "foo" not found' >&2
      exit 1
    fi
    rm -f '{state}/live.yaml'
    echo 'pod "foo" deleted'
    ;;
esac
"#
    );
    fs::write(&program, script).unwrap();
    fs::set_permissions(&program, fs::Permissions::from_mode(0o755)).unwrap();
    program.display().to_string()
}

fn params() -> BTreeMap<String, String> {
    BTreeMap::from([("Name".to_string(), "foo".to_string())])
}

#[test]
fn pod_lifecycle_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let kubectl = Kubectl::with_program(fake_cluster(dir.path()));

    kubectl.apply(MANIFEST, &params()).unwrap();

    // Poll until the reported phase turns Running. The fake flips after two
    // polls, so the loop genuinely has to iterate.
    let mut phase = String::new();
    for _ in 0..10 {
        let out = kubectl.get_by_name("pod", "foo", "default").unwrap();
        let pod: Value = serde_json::from_slice(&out).unwrap();
        phase = pod["status"]["phase"].as_str().unwrap_or_default().to_string();
        if phase == "Running" {
            break;
        }
    }
    assert_eq!(phase, "Running");

    let out = kubectl
        .exec("foo", "default", &["echo", "foo", "bar"])
        .unwrap();
    assert_eq!(String::from_utf8_lossy(&out).trim(), "foo bar");

    // A failing in-pod command surfaces as an error.
    assert!(kubectl.exec("foo", "default", &["false"]).is_err());

    kubectl.delete(MANIFEST, &params()).unwrap();
    assert!(kubectl.get_by_name("pod", "foo", "default").is_err());
}

#[test]
fn delete_of_absent_resource_is_not_masked() {
    let dir = tempfile::tempdir().unwrap();
    let kubectl = Kubectl::with_program(fake_cluster(dir.path()));

    let err = kubectl.delete(MANIFEST, &params()).unwrap_err();
    assert!(err.to_string().contains("NotFound"), "got: {}", err);
}
