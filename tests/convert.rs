use std::thread;

use bytes_human::{
    bytes_to_human, human_to_bytes, ConvertError, Options, RoundMode, UnitStandard,
};

fn binary(precision: u32) -> Options {
    Options {
        standard: UnitStandard::Binary,
        precision,
        ..Default::default()
    }
}

fn decimal(precision: u32) -> Options {
    Options {
        standard: UnitStandard::Decimal,
        precision,
        ..Default::default()
    }
}

#[test]
fn bytes_to_human_literals() {
    assert_eq!(bytes_to_human(0, &binary(1)).unwrap(), "0 B");
    assert_eq!(bytes_to_human(1024, &binary(1)).unwrap(), "1.0 KiB");
    assert_eq!(bytes_to_human(1048576, &binary(2)).unwrap(), "1.00 MiB");
    assert_eq!(bytes_to_human(1500000000, &decimal(1)).unwrap(), "1.5 GB");
    assert_eq!(bytes_to_human(u64::MAX, &binary(1)).unwrap(), "16.0 EiB");
}

#[test]
fn human_to_bytes_literals() {
    assert_eq!(human_to_bytes("1 KiB", &binary(1)).unwrap(), 1024);
    assert_eq!(human_to_bytes("1.5 GB", &decimal(1)).unwrap(), 1500000000);
    assert_eq!(human_to_bytes("1KB", &decimal(1)).unwrap(), 1000);
    assert_eq!(human_to_bytes("1kb", &decimal(1)).unwrap(), 1000);
}

#[test]
fn decimal_suffix_overrides_binary_request() {
    assert_eq!(human_to_bytes("1.5 GB", &binary(1)).unwrap(), 1500000000);
    assert_eq!(human_to_bytes("2 mb", &binary(1)).unwrap(), 2000000);
    assert_eq!(human_to_bytes("2 MiB", &binary(1)).unwrap(), 2097152);
}

#[test]
fn rounding_modes() {
    let cases = [
        (1536, RoundMode::Nearest, "1.5 KiB"),
        (1536, RoundMode::Up, "1.5 KiB"),
        (1536, RoundMode::Down, "1.5 KiB"),
        (1540, RoundMode::Up, "1.6 KiB"),
        (1540, RoundMode::Down, "1.5 KiB"),
    ];
    for (bytes, round, expect) in cases {
        let opts = Options {
            round,
            ..binary(1)
        };
        assert_eq!(bytes_to_human(bytes, &opts).unwrap(), expect);
    }
}

#[test]
fn invalid_inputs() {
    assert!(matches!(
        bytes_to_human(1024, &binary(7)),
        Err(ConvertError::InvalidPrecision(7))
    ));

    let opts = Options {
        unit: Some(String::from("XB")),
        ..binary(1)
    };
    assert!(matches!(
        bytes_to_human(1024, &opts),
        Err(ConvertError::InvalidUnit(_))
    ));

    assert!(matches!(
        human_to_bytes("abc", &binary(1)),
        Err(ConvertError::InvalidFormat(_))
    ));
    assert!(matches!(
        human_to_bytes("+3 TB", &decimal(1)),
        Err(ConvertError::InvalidFormat(_))
    ));
    assert!(matches!(
        human_to_bytes("-1 KB", &decimal(1)),
        Err(ConvertError::InvalidNumber(_))
    ));
    assert!(matches!(
        human_to_bytes("1 XB", &binary(1)),
        Err(ConvertError::UnknownUnit(_))
    ));
}

#[test]
fn precision_is_always_exact() {
    for precision in 0..=6 {
        let text = bytes_to_human(3 * 1024 * 1024, &binary(precision)).unwrap();
        let number = text.split(' ').next().unwrap();
        let digits = number.split('.').nth(1).map(str::len).unwrap_or(0);
        assert_eq!(digits, precision as usize, "{text}");
    }
}

#[test]
fn round_trip_within_precision() {
    for opts in [binary(6), decimal(6)] {
        for bytes in [7, 4095, 65_537, 10_000_001, 3_221_225_473, 1 << 50] {
            let text = bytes_to_human(bytes, &opts).unwrap();
            let parsed = human_to_bytes(&text, &opts).unwrap();

            let (_, unit) = text.split_once(' ').unwrap();
            let scale = human_to_bytes(&format!("1 {unit}"), &opts).unwrap() as f64;
            let bound = 0.5e-6 * scale + 1.0;
            let diff = (parsed as f64 - bytes as f64).abs();
            assert!(diff <= bound, "{bytes} -> {text} -> {parsed}");
        }
    }
}

#[test]
fn concurrent_conversions() {
    let handles: Vec<_> = (0..8u64)
        .map(|i| {
            thread::spawn(move || {
                let opts = binary(1);
                let bytes = (i + 1) * 1024;
                let text = bytes_to_human(bytes, &opts).unwrap();
                (text.clone(), human_to_bytes(&text, &opts).unwrap())
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (text, bytes) = handle.join().unwrap();
        assert_eq!(text, format!("{}.0 KiB", i + 1));
        assert_eq!(bytes, (i as u64 + 1) * 1024);
    }
}
