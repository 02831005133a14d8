fn main() {
    // Commands reachable from web content; everything else is denied
    let manifest =
        tauri_build::AppManifest::new().commands(&["bridge_notify", "bridge_window_control"]);

    tauri_build::try_build(tauri_build::Attributes::new().app_manifest(manifest))
        .expect("failed to run tauri-build");
}
