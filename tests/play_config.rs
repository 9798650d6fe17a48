//! Loading `play` configuration from JSON files

use std::io::Write;

use tempfile::NamedTempFile;
use ttt_minimax::{
    Error,
    cli::{
        commands::play::{PlayArgs, run},
        config::{AgentKind, PlayConfig},
    },
};

fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(json.as_bytes()).expect("write config");
    file
}

#[test]
fn loads_config_file() {
    let file = write_config(
        r#"{"games": 4, "x": "random", "o": "optimal", "seed": 9, "search": {"parallel": true}}"#,
    );
    let config = PlayConfig::load(file.path()).unwrap();
    assert_eq!(config.games, 4);
    assert_eq!(config.x, AgentKind::Random);
    assert_eq!(config.o, AgentKind::Optimal);
    assert_eq!(config.seed, Some(9));
    assert!(config.search.parallel);
    assert_eq!(config.search.max_depth, None);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PlayConfig::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("read config"));
}

#[test]
fn malformed_file_is_a_serialization_error() {
    let file = write_config("{ games: ");
    let err = PlayConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}

#[test]
fn flags_override_file() {
    let file = write_config(r#"{"games": 50, "x": "random", "o": "random"}"#);
    let args = PlayArgs {
        games: Some(2),
        x: None,
        o: Some(AgentKind::Optimal),
        seed: Some(1),
        config: Some(file.path().to_path_buf()),
        quiet: true,
    };
    let config = args.resolve().unwrap();
    assert_eq!(config.games, 2);
    assert_eq!(config.x, AgentKind::Random);
    assert_eq!(config.o, AgentKind::Optimal);

    let tally = run(&config).unwrap();
    assert_eq!(tally.games(), 2);
    assert_eq!(tally.x_wins, 0, "random X cannot beat optimal O");
}
