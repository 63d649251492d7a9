fn main() {
    // napi_build wires the cdylib link args for the Node addon target only.
    if std::env::var_os("CARGO_FEATURE_NAPI").is_some() {
        napi_build::setup();
    }
}
