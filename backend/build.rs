use std::fs;
use std::path::Path;

fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        if let Err(err) = fs::create_dir_all(out_dir) {
            panic!("cannot create {}: {err}", out_dir.display());
        }
        let options = fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true);
        if let Err(err) = fs_extra::dir::copy(dist_dir, out_dir, &options) {
            panic!("cannot copy the frontend bundle: {err}");
        }
    }

    // The embedded directory must exist even before the frontend is built.
    let embedded = out_dir.join("dist");
    if !embedded.exists() {
        if let Err(err) = fs::create_dir_all(&embedded) {
            panic!("cannot create {}: {err}", embedded.display());
        }
    }

    println!("cargo:rerun-if-changed=../frontend/dist");
}
