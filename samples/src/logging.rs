// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use tracing::Level;

/// The maximum log level for a `-v` count.
pub fn max_level(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Enables tracing for the application.
///
/// Logs go to `stderr`, the sample output goes to `stdout`.
pub fn enable_tracing(verbosity: u8) {
    use tracing_subscriber::fmt::format::FmtSpan;

    let subscriber = tracing_subscriber::fmt()
        .with_level(true)
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .with_max_level(max_level(verbosity))
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("setting global subscriber succeeds");
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, Level::WARN)]
    #[test_case(1, Level::INFO)]
    #[test_case(2, Level::DEBUG)]
    #[test_case(7, Level::DEBUG)]
    fn levels(verbosity: u8, want: Level) {
        assert_eq!(max_level(verbosity), want);
    }

    // The only test in this crate that installs the global subscriber.
    #[test]
    fn install() {
        enable_tracing(1);
        assert!(tracing::enabled!(Level::INFO));
        assert!(!tracing::enabled!(Level::DEBUG));
    }
}
