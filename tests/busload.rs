//! End-to-end bus load computation and configuration persistence.

use canload_rs::{
    BusConfig, DEFAULT_BAUD_RATE, Error, FrameVariant, Message, Result, bus_load,
};

#[test]
fn classic_bus_mixed_traffic() -> Result<()> {
    // 1000 Hz x 7 standard frames (111..130 bits each) plus
    // 500 Hz x 1 extended frame (131..154 bits) at 1 Mbit/s:
    //   min = (111 * 7000 + 131 * 500) / 1e6 = 84.25%
    //   max = (130 * 7000 + 154 * 500) / 1e6 = 98.70%
    let messages = [
        Message::new(1000.0, 8, 7, FrameVariant::ClassicStandard),
        Message::new(500.0, 8, 1, FrameVariant::ClassicExtended),
    ];

    let load = bus_load(&messages, DEFAULT_BAUD_RATE)?;
    assert!((load.min_percent - 84.25).abs() < 1e-9);
    assert!((load.max_percent - 98.70).abs() < 1e-9);
    assert!((load.avg_percent() - 91.475).abs() < 1e-9);
    Ok(())
}

#[test]
fn fd_bus_uses_quantized_payloads() -> Result<()> {
    // A 10-byte FD payload goes out as 12 bytes (DLC 9); the load must
    // reflect the quantized length, identical to requesting 12 directly.
    let at_10 = bus_load(
        &[Message::new(200.0, 10, 1, FrameVariant::FdStandard)],
        2_000_000,
    )?;
    let at_12 = bus_load(
        &[Message::new(200.0, 12, 1, FrameVariant::FdStandard)],
        2_000_000,
    )?;
    assert_eq!(at_10, at_12);
    Ok(())
}

#[test]
fn fractional_frequency_contributes_proportionally() -> Result<()> {
    let half = bus_load(
        &[Message::new(0.5, 8, 1, FrameVariant::ClassicStandard)],
        DEFAULT_BAUD_RATE,
    )?;
    let full = bus_load(
        &[Message::new(1.0, 8, 1, FrameVariant::ClassicStandard)],
        DEFAULT_BAUD_RATE,
    )?;
    assert!((full.min_percent - 2.0 * half.min_percent).abs() < 1e-12);
    Ok(())
}

#[test]
fn validation_blocks_computation() {
    // Each rejection reason surfaces as its own variant.
    let classic = Message::new(100.0, 8, 1, FrameVariant::ClassicStandard);
    let fd = Message::new(100.0, 8, 1, FrameVariant::FdStandard);

    assert!(matches!(
        bus_load(&[classic], 6_000_000),
        Err(Error::InvalidBaudRate { .. })
    ));
    assert!(matches!(
        bus_load(&[classic, fd], DEFAULT_BAUD_RATE),
        Err(Error::MixedFrameFamilies)
    ));
    assert!(matches!(
        bus_load(
            &[Message::new(100.0, 20, 1, FrameVariant::ClassicStandard)],
            DEFAULT_BAUD_RATE
        ),
        Err(Error::PayloadTooLong { .. })
    ));
}

#[test]
fn error_messages_name_the_rejection() {
    let err = bus_load(&[], 0).unwrap_err();
    assert!(err.to_string().contains("baud rate"));

    let err = bus_load(
        &[Message::new(1.0, 9, 1, FrameVariant::ClassicExtended)],
        DEFAULT_BAUD_RATE,
    )
    .unwrap_err();
    let text = err.to_string();
    assert!(text.contains("9 bytes") && text.contains("8-byte"));
}

#[test]
fn config_round_trips_through_json() -> Result<()> {
    let config = BusConfig {
        baud_rate: 2_000_000,
        messages: vec![
            Message::new(100.0, 64, 2, FrameVariant::FdExtended),
            Message::new(10.0, 12, 1, FrameVariant::FdStandard),
        ],
    };

    let path = std::env::temp_dir().join("canload_config_roundtrip.json");
    let path_str = path.to_str().unwrap();

    config.save_to_file(path_str)?;
    let restored = BusConfig::load_from_file(path_str)?;
    assert_eq!(restored, config);

    let _ = std::fs::remove_file(&path);
    Ok(())
}

#[test]
fn config_uses_the_original_json_shape() {
    let json = r#"{
        "baudRate": 500000,
        "messages": [
            { "frequency": 1000, "dataLength": 8, "frameCount": 7, "frameType": "CAN_STANDARD" },
            { "frequency": 500, "dataLength": 16, "frameCount": 1, "frameType": "FDCAN_STANDARD" }
        ]
    }"#;

    let config: BusConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.baud_rate, 500_000);
    assert_eq!(config.messages[0].variant, FrameVariant::ClassicStandard);
    assert_eq!(config.messages[1].variant, FrameVariant::FdStandard);
    assert_eq!(config.messages[1].payload_bytes, 16);
}

#[test]
fn legacy_fdcan_spelling_still_loads() {
    let json = r#"{ "frequency": 500, "dataLength": 16, "frameCount": 1, "frameType": "FDCAN" }"#;
    let message: Message = serde_json::from_str(json).unwrap();
    assert_eq!(message.variant, FrameVariant::FdStandard);
}

#[test]
fn load_or_default_falls_back_on_missing_file() {
    let path = std::env::temp_dir().join("canload_config_does_not_exist.json");
    let config = BusConfig::load_or_default(path.to_str().unwrap());
    assert_eq!(config, BusConfig::default());
}

#[test]
fn load_or_default_falls_back_on_empty_message_list() {
    let path = std::env::temp_dir().join("canload_config_empty.json");
    std::fs::write(&path, r#"{ "baudRate": 250000, "messages": [] }"#).unwrap();

    let config = BusConfig::load_or_default(path.to_str().unwrap());
    assert_eq!(config, BusConfig::default());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn default_config_is_valid_and_computable() -> Result<()> {
    let config = BusConfig::default();
    let load = bus_load(&config.messages, config.baud_rate)?;
    assert!(load.min_percent > 0.0);
    assert!(load.max_percent >= load.min_percent);
    Ok(())
}
