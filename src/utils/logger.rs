use env_logger::{Builder, Env};
use std::io::Write;

/// Initialize logging. `RUST_LOG` overrides the default filter, which
/// keeps third-party crates at `warn` and this crate at `info`.
pub fn init_logger() {
    let env = Env::default().filter_or("RUST_LOG", "warn,vocanova=info");

    Builder::from_env(env)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        // stderr, so the final status line on stdout stays scriptable
        .target(env_logger::Target::Stderr)
        .init();
}
