//! 集成测试 - 编译 / 链接全流程

mod common;

use common::{path_str, BuildDir, FakeCompiler};
use csc_adapt_workspace::{
    AdaptError, Adapter, CompileMode, MemoryFileSystem, NativeFileSystem, VirtualFileSystem,
};

fn native_adapter() -> Adapter<NativeFileSystem, FakeCompiler> {
    Adapter::new(NativeFileSystem::new(), FakeCompiler::default())
}

#[test]
fn test_compile_object_writes_placeholder_on_disk() {
    let build = BuildDir::new();
    let object = build.object("a.obj");
    let adapter = native_adapter();

    let status = adapter
        .dispatch(&["compile_object", "/src/a.cs", &path_str(&object)])
        .unwrap();

    assert_eq!(status, 0);
    assert_eq!(std::fs::read_to_string(&object).unwrap(), "/src/a.cs\n");
    assert!(adapter.compiler().calls().is_empty());
}

#[test]
fn test_compile_object_twice_gives_same_bytes() {
    let build = BuildDir::new();
    let object = build.object("a.obj");
    let adapter = native_adapter();

    adapter.dispatch(&["compile_object", "a.cs", &path_str(&object)]).unwrap();
    let first = std::fs::read(&object).unwrap();
    adapter.dispatch(&["compile_object", "a.cs", &path_str(&object)]).unwrap();

    assert_eq!(std::fs::read(&object).unwrap(), first);
}

#[test]
fn test_compile_then_link_on_disk() {
    let build = BuildDir::new();
    let a = path_str(&build.object("a.obj"));
    let b = path_str(&build.object("b.obj"));
    let adapter = native_adapter();

    adapter.dispatch(&["compile_object", "/src/a.cs", &a]).unwrap();
    adapter.dispatch(&["compile_object", "/src/b.cs", &b]).unwrap();
    let status = adapter
        .dispatch(&["link_executable", "/out:app.exe", "---", &a, &b])
        .unwrap();

    assert_eq!(status, 0);
    assert_eq!(
        adapter.compiler().calls(),
        vec![vec!["/out:app.exe", "/src/a.cs", "/src/b.cs"]]
    );
}

#[test]
fn test_shared_library_keeps_flags_verbatim() {
    let build = BuildDir::new();
    let a = path_str(&build.object("a.obj"));
    let adapter = native_adapter();

    adapter.dispatch(&["compile_object", "lib.cs", &a]).unwrap();
    adapter
        .dispatch(&["shared_library", "/target:library", "/out:lib.dll", "---", &a])
        .unwrap();

    assert_eq!(
        adapter.compiler().calls(),
        vec![vec!["/target:library", "/out:lib.dll", "lib.cs"]]
    );
}

#[test]
fn test_link_propagates_compiler_exit_code() {
    let adapter = Adapter::new(NativeFileSystem::new(), FakeCompiler::exiting_with(5));
    assert_eq!(adapter.dispatch(&["link_executable", "/out:x.exe"]).unwrap(), 5);
}

#[test]
fn test_link_with_missing_placeholder() {
    let build = BuildDir::new();
    let missing = build.object("missing.obj");
    let adapter = native_adapter();

    let err = adapter
        .dispatch(&["link_executable", "---", &path_str(&missing)])
        .unwrap_err();

    match err {
        AdaptError::BacktraceResolution { object, .. } => assert_eq!(object, missing),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(adapter.compiler().calls().is_empty());
}

#[test]
fn test_link_with_empty_placeholder() {
    let build = BuildDir::new();
    let empty = build.object("empty.obj");
    std::fs::write(&empty, "\n").unwrap();
    let adapter = native_adapter();

    let err = adapter
        .dispatch(&["link_executable", "---", &path_str(&empty)])
        .unwrap_err();

    assert!(matches!(err, AdaptError::EmptyBacktrace { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_placeholder_into_missing_directory() {
    let build = BuildDir::new();
    let object = build.root().join("no_such_dir").join("a.obj");
    let adapter = native_adapter();

    let err = adapter
        .dispatch(&["compile_object", "a.cs", &path_str(&object)])
        .unwrap_err();

    assert!(matches!(err, AdaptError::PlaceholderWrite { .. }));
    assert!(!err.is_usage());
}

#[test]
fn test_usage_errors_touch_nothing() {
    let fs = MemoryFileSystem::new();
    let adapter = Adapter::new(fs.clone(), FakeCompiler::default());

    for tokens in [
        vec![],
        vec!["archive"],
        vec!["static_library", "---", "a.obj"],
        vec!["shared_module"],
        vec!["compile_object", "a.cs", "a.obj", "extra"],
    ] {
        let err = adapter.dispatch(&tokens).unwrap_err();
        assert!(err.is_usage(), "{tokens:?}: {err}");
        assert_eq!(err.exit_code(), 1);
    }

    assert!(fs.is_empty());
    assert!(adapter.compiler().calls().is_empty());
}

#[test]
fn test_explicit_test_compile_mode() {
    let adapter = Adapter::new(MemoryFileSystem::new(), FakeCompiler::default());

    adapter
        .dispatch_with_mode(&["test_csc", "probe.cs"], CompileMode::Test)
        .unwrap();
    adapter.dispatch(&["compile_object", "try.cs"]).unwrap();

    assert_eq!(
        adapter.compiler().calls(),
        vec![vec!["probe.cs"], vec!["try.cs"]]
    );
    assert!(!adapter.store().fs().exists(std::path::Path::new("try.cs")));
}

#[cfg(unix)]
mod with_processes {
    use super::*;
    use csc_adapt_workspace::NativeAdapter;

    #[test]
    fn test_native_adapter_runs_compiler() {
        let build = BuildDir::new();
        let a = path_str(&build.object("a.obj"));
        let adapter = NativeAdapter::native("true");

        adapter.dispatch(&["compile_object", "a.cs", &a]).unwrap();
        assert_eq!(adapter.dispatch(&["link_executable", "---", &a]).unwrap(), 0);
    }

    #[test]
    fn test_native_adapter_propagates_exit_code() {
        let adapter = NativeAdapter::native("sh");
        let status = adapter
            .dispatch(&["shared_library", "-c", "exit 7"])
            .unwrap();
        assert_eq!(status, 7);
    }

    #[test]
    fn test_native_adapter_missing_compiler() {
        let adapter = NativeAdapter::native("/nonexistent/csc-adapt/csc");
        let err = adapter.dispatch(&["test_csc", "a.cs"]).unwrap_err();

        assert!(matches!(err, AdaptError::CompilerLaunch { .. }));
        assert_eq!(err.exit_code(), 2);
    }
}
