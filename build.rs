//! Retrieves information about the version of the binary from Git and the
//! build environment so that it can be printed at runtime.

fn main() -> shadow_rs::SdResult<()> {
    shadow_rs::new()
}
