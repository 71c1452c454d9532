fn main() {
    println!("cargo::rerun-if-changed=wrapper.c");

    // os/log.h only exists on Apple platforms; elsewhere the safe crate uses
    // its own fallback and nothing here is linked.
    if std::env::var("CARGO_CFG_TARGET_VENDOR").as_deref() != Ok("apple") {
        return;
    }

    let mut cc = cc::Build::new();
    cc.file("wrapper.c");
    cc.warnings(false);
    cc.compile("oslog_wrapper");
}
