mod common;

use {
    chrono::Utc,
    common::unix,
    std::{cmp::Ordering, time::Duration},
    tai64::{ManualClock, Tai64, Tai64Error},
};

#[test]
fn now() {
    let before = Utc::now().timestamp();
    let t = Tai64::now().unwrap();
    let after = Utc::now().timestamp();

    // Second granularity.
    assert!(t.to_unix() >= before);
    assert!(t.to_unix() <= after);
    assert!(t.is_after(&Tai64::EPOCH));
    assert!(!Tai64::EPOCH.is_after(&t));
    assert!(Tai64::EPOCH.is_before(&t));
    assert!(!t.is_before(&Tai64::EPOCH));
}

#[test]
fn now_is_monotonic() {
    let t1 = Tai64::now().unwrap();
    std::thread::sleep(Duration::from_millis(5));
    let t2 = Tai64::now().unwrap();

    assert_ne!(t1.compare_to(&t2), Ordering::Greater);
    assert!(t2 - t1 <= 1);
}

#[test]
fn now_from_manual_clock() {
    let clock = ManualClock::new(unix(2017, 1, 1, 0, 0, 0));
    let t1 = Tai64::now_from(&clock).unwrap();
    assert_eq!(t1.to_hex_string(), "40000000586846a5");

    clock.advance(60);
    let t2 = Tai64::now_from(&clock).unwrap();
    assert_eq!(t2 - t1, 60);
    assert_eq!(t2.to_unix(), unix(2017, 1, 1, 0, 1, 0));
}

#[test]
fn equality_with_self() {
    let now = Tai64::now().unwrap();
    assert!(now.is_equal(&now));
    assert!(!now.is_after(&now));
    assert!(!now.is_before(&now));
    assert_eq!(now.compare_to(&now), Ordering::Equal);
}

#[test]
fn from_hex_string() {
    let epoch = Tai64::from_hex_string("4000000000000000").unwrap();
    assert!(epoch.is_equal(&Tai64::EPOCH));
    assert_eq!(epoch, Tai64::EPOCH);
}

#[test]
fn from_hex_string_out_of_range() {
    assert_eq!(
        Tai64::from_hex_string("7fffffffffffffff"),
        Err(Tai64Error::LabelOutOfRange(i64::MAX as i128))
    );
    assert!(matches!(
        Tai64::from_hex_string("ffffffffffffffff"),
        Err(Tai64Error::LabelOutOfRange(_))
    ));
    assert!(Tai64::from_hex_string("7ffffffffffffffe").is_ok());
}

#[test]
fn from_string_rejects_malformed_text() {
    for s in [
        "",
        "4000 0000",
        "0x4000000000000000",
        "400000000000000g",
        "+4000000000000000",
        "-0",
        "-1",
    ] {
        let err = Tai64::from_hex_string(s).unwrap_err();
        assert!(err.is_parse_error(), "{s:?} gave {err:?}");
    }
    assert_eq!(
        Tai64::from_string("-1", 10),
        Err(Tai64Error::MalformedLabel {
            input: "-1".into(),
            radix: 10
        })
    );
    assert_eq!(
        Tai64::from_string("4000000000000000", 37),
        Err(Tai64Error::UnsupportedRadix(37))
    );
}

#[test]
fn from_unix() {
    let epoch = Tai64::from_unix(unix(1970, 1, 1, 0, 0, 0)).unwrap();
    assert_eq!(epoch, Tai64::EPOCH);
}

#[test]
fn from_byte_array() {
    let epoch = Tai64::from_byte_array(&[64, 0, 0, 0, 0, 0, 0, 0]).unwrap();
    assert_eq!(epoch, Tai64::EPOCH);
}

#[test]
fn from_byte_array_out_of_range() {
    assert_eq!(
        Tai64::from_byte_array(&[127, 255, 255, 255, 255, 255, 255, 255]),
        Err(Tai64Error::LabelOutOfRange(i64::MAX as i128))
    );
    assert_eq!(
        Tai64::from_byte_array(&[255; 8]),
        Err(Tai64Error::LabelOutOfRange(-1))
    );
}

#[test]
fn from_byte_array_wrong_length() {
    assert_eq!(
        Tai64::from_byte_array(&[64, 0, 0, 0, 0, 0, 0]),
        Err(Tai64Error::InvalidLength(7))
    );
    assert_eq!(
        Tai64::from_byte_array(&[64, 0, 0, 0, 0, 0, 0, 0, 0]),
        Err(Tai64Error::InvalidLength(9))
    );
    assert_eq!(Tai64::from_byte_array(&[]), Err(Tai64Error::InvalidLength(0)));
}

#[test]
fn epoch_encodings() {
    assert_eq!(Tai64::EPOCH.to_hex_string(), "4000000000000000");
    assert_eq!(Tai64::EPOCH.to_string(), "4000000000000000");
    assert_eq!(Tai64::EPOCH.to_byte_array(), [64, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(
        Tai64::EPOCH.to_string_radix(10).unwrap(),
        "4611686018427387904"
    );
}

#[test]
fn encodings_round_trip() {
    let labels = [
        Tai64::from_label(0).unwrap(),
        Tai64::EPOCH,
        Tai64::now().unwrap(),
        Tai64::from_unix(unix(1988, 1, 1, 0, 0, 0)).unwrap(),
        Tai64::from_label(tai64::LABEL_MAX - 1).unwrap(),
    ];
    for x in labels {
        assert!(Tai64::from_byte_array(&x.to_byte_array()).unwrap().is_equal(&x));
        assert!(Tai64::from_hex_string(&x.to_hex_string()).unwrap().is_equal(&x));
        for radix in [2, 8, 10, 36] {
            let s = x.to_string_radix(radix).unwrap();
            assert_eq!(Tai64::from_string(&s, radix), Ok(x));
        }
    }
}

#[test]
fn unix_round_trip_across_years() {
    for year in 1960..2040 {
        for (month, day) in [(1, 1), (6, 30), (7, 1), (12, 31)] {
            let ts = unix(year, month, day, 23, 59, 59);
            assert_eq!(Tai64::from_unix(ts).unwrap().to_unix(), ts);
            let ts = unix(year, month, day, 0, 0, 0);
            assert_eq!(Tai64::from_unix(ts).unwrap().to_unix(), ts);
        }
    }
}

#[test]
fn ordering_follows_time() {
    let t1972 = Tai64::from_unix(unix(1972, 1, 1, 0, 0, 0)).unwrap();
    let t2017 = Tai64::from_unix(unix(2017, 1, 1, 0, 0, 0)).unwrap();
    let pre_epoch = Tai64::from_unix(unix(1969, 7, 20, 20, 17, 40)).unwrap();

    let mut labels = vec![t2017, Tai64::EPOCH, t1972, pre_epoch];
    labels.sort();
    assert_eq!(labels, vec![pre_epoch, Tai64::EPOCH, t1972, t2017]);

    assert_eq!(t1972.compare_to(&t2017) as i8, -1);
    assert_eq!(t2017.compare_to(&t1972) as i8, 1);
    assert_eq!(t2017.compare_to(&t2017) as i8, 0);
}
