pub fn about() -> Vec<String> {
    vec![
        "A television control panel: power, mute, channel and volume, \
        with a picture for every channel.".to_string(),
        "\n".to_string(),
        "Keyboard: P power, M mute, Up/Down channel, Left/Right volume.".to_string(),
        format!("Version: {}", env!("CARGO_PKG_VERSION")),
    ]
}
