//! Tracing subscriber setup shared by the binaries.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when it is set. Otherwise the filter falls back to
/// `<crate_name>=<default_level>` so that only this application's logs are shown.
///
/// # Arguments
///
/// * `crate_name` - Binary name (e.g. `env!("CARGO_BIN_NAME")`); `-` is mapped to `_`
/// * `default_level` - Level used when `RUST_LOG` is not set (e.g. `"debug"`)
pub fn setup_logger(crate_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(crate_name, default_level)));

    // A second call (e.g. from tests) leaves the first subscriber in place.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(true).with_target(true))
        .try_init();
}

/// Build the fallback filter directive for a binary.
///
/// Library crates of the workspace share the binary's level.
fn default_directive(crate_name: &str, default_level: &str) -> String {
    let module = crate_name.replace('-', "_");
    let library = module
        .strip_suffix("_client")
        .or_else(|| module.strip_suffix("_server"))
        .map(|prefix| format!(",{prefix}_client={default_level},{prefix}_server={default_level}"))
        .unwrap_or_default();
    format!("{module}={default_level}{library},tower_http={default_level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_for_binary() {
        // テスト項目: バイナリ名からフィルタ指定が組み立てられる
        // given (前提条件):
        let crate_name = "santa-room-server";

        // when (操作):
        let directive = default_directive(crate_name, "debug");

        // then (期待する結果):
        assert!(directive.starts_with("santa_room_server=debug"));
        assert!(directive.contains("santa_room_client=debug"));
        assert!(directive.contains("tower_http=debug"));
    }

    #[test]
    fn test_default_directive_for_unknown_name() {
        // テスト項目: サフィックスのない名前でもフィルタ指定が作れる
        // when (操作):
        let directive = default_directive("tool", "info");

        // then (期待する結果):
        assert_eq!(directive, "tool=info,tower_http=info");
    }
}
