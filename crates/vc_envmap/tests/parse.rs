#![allow(non_snake_case, reason = "fields named after environment keys")]

use std::collections::BTreeMap;

use vc_envmap::{Dynamic, EnvConfig, EnvError, EnvParser, EnvShape};

type Source = BTreeMap<&'static str, &'static str>;

fn source(pairs: &[(&'static str, &'static str)]) -> Source {
    pairs.iter().copied().collect()
}

fn parse<T: EnvShape + Default>(
    config: EnvConfig,
    pairs: &[(&'static str, &'static str)],
) -> Result<T, EnvError> {
    let mut target = T::default();
    EnvParser::with_source(config, source(pairs)).parse(&mut target)?;
    Ok(target)
}

// -----------------------------------------------------------------------------
// Scalars

#[derive(EnvShape, Default, Debug, PartialEq)]
struct Scalars {
    pub TEST_BOOL: bool,
    pub TEST_INT8: i8,
    pub TEST_INT64: i64,
    pub TEST_UINT16: u16,
    pub TEST_UINT64: u64,
    pub TEST_FLOAT32: f32,
    pub TEST_FLOAT64: f64,
    pub TEST_STRING: String,
    pub TEST_ISIZE: isize,
}

#[test]
fn scalar_kinds() {
    let parsed: Scalars = parse(
        EnvConfig::new(),
        &[
            ("TEST_BOOL", "True"),
            ("TEST_INT8", "127"),
            ("TEST_INT64", "9223372036854775807"),
            ("TEST_UINT16", "0xffff"),
            ("TEST_UINT64", "18446744073709551615"),
            ("TEST_FLOAT32", "3.1415926"),
            ("TEST_FLOAT64", "3.1415926535"),
            ("TEST_STRING", "test"),
            ("TEST_ISIZE", "-0b11"),
        ],
    )
    .unwrap();

    assert_eq!(
        parsed,
        Scalars {
            TEST_BOOL: true,
            TEST_INT8: 127,
            TEST_INT64: i64::MAX,
            TEST_UINT16: u16::MAX,
            TEST_UINT64: u64::MAX,
            TEST_FLOAT32: 3.1415926,
            TEST_FLOAT64: 3.1415926535,
            TEST_STRING: "test".into(),
            TEST_ISIZE: -3,
        }
    );
}

#[test]
fn out_of_range_is_a_coercion_error() {
    #[derive(EnvShape, Default)]
    struct Args {
        pub SMALL: u8,
    }

    let err = parse::<Args>(EnvConfig::new(), &[("SMALL", "256")]).err().unwrap();
    match &err {
        EnvError::Coercion {
            key,
            text,
            expected,
            ..
        } => {
            assert_eq!(key, "SMALL");
            assert_eq!(text, "256");
            assert_eq!(*expected, "u8");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(std::error::Error::source(&err).is_some());
}

// -----------------------------------------------------------------------------
// README example

#[derive(EnvShape, Default, Debug, PartialEq)]
struct Readme {
    pub SOME_ENV: i32,
    pub SOME_ENV_1: String,
    pub SOME_ENV_2: Vec<String>,
}

#[test]
fn readme_example() {
    let parsed: Readme = parse(
        EnvConfig::new(),
        &[
            ("SOME_ENV", "1221"),
            ("SOME_ENV_1", "hello"),
            ("SOME_ENV_2", "lovely,cute,Hexagram"),
        ],
    )
    .unwrap();

    assert_eq!(parsed.SOME_ENV, 1221);
    assert_eq!(parsed.SOME_ENV_1, "hello");
    assert_eq!(parsed.SOME_ENV_2, ["lovely", "cute", "Hexagram"]);
}

// -----------------------------------------------------------------------------
// Missing values

#[test]
fn missing_key() {
    #[derive(EnvShape, Default, Debug)]
    struct Args {
        pub TEST_ALLOW_EMPTY_STRING: String,
        pub TEST_ALLOW_EMPTY_INT: i32,
        pub TEST_ALLOW_EMPTY_LIST: Vec<u8>,
    }

    let pairs = [("TEST_ALLOW_EMPTY_INT", "114514")];

    let err = parse::<Args>(EnvConfig::new(), &pairs).unwrap_err();
    assert!(err.is_missing_value());
    assert_eq!(err.key(), "TEST_ALLOW_EMPTY_STRING");
    assert_eq!(err.to_string(), "missing environment key: TEST_ALLOW_EMPTY_STRING");

    let parsed: Args = parse(EnvConfig::new().with_allow_empty(true), &pairs).unwrap();
    assert_eq!(parsed.TEST_ALLOW_EMPTY_STRING, "");
    assert_eq!(parsed.TEST_ALLOW_EMPTY_INT, 114514);
    assert!(parsed.TEST_ALLOW_EMPTY_LIST.is_empty());

    let parsed: Args = parse(
        EnvConfig::new().with_allow_empty(true),
        &[("TEST_ALLOW_EMPTY_INT", "")],
    )
    .unwrap();
    assert_eq!(parsed.TEST_ALLOW_EMPTY_INT, 0);
}

#[test]
fn defaults() {
    #[derive(EnvShape, Default)]
    struct Args {
        #[env("default:LOVELY_CUTE_HEXAGRAM")]
        pub TEST_DEFAULT_STRING: String,
        #[env("default:333333")]
        pub TEST_DEFAULT_INT: i32,
        #[env("default:7")]
        pub TEST_DEFAULT_POINTER: Option<u8>,
    }

    let parsed: Args = parse(EnvConfig::new(), &[("TEST_DEFAULT_INT", "")]).unwrap();
    assert_eq!(parsed.TEST_DEFAULT_STRING, "LOVELY_CUTE_HEXAGRAM");
    assert_eq!(parsed.TEST_DEFAULT_INT, 333333);
    assert_eq!(parsed.TEST_DEFAULT_POINTER, Some(7));
}

#[test]
fn direct_default_ignores_source() {
    #[derive(EnvShape, Default)]
    struct Args {
        #[env("default:LOVELY_CUTE_HEXAGRAM")]
        pub TEST_DIRECT_DEFAULT_STRING: String,
        #[env("default:333333")]
        pub TEST_DIRECT_DEFAULT_INT: i32,
    }

    let parsed: Args = parse(
        EnvConfig::new().with_direct_default(true),
        &[
            ("TEST_DIRECT_DEFAULT_INT", "131313"),
            ("TEST_DIRECT_DEFAULT_STRING", "MWE_MIAO_NYA"),
        ],
    )
    .unwrap();

    assert_eq!(parsed.TEST_DIRECT_DEFAULT_STRING, "LOVELY_CUTE_HEXAGRAM");
    assert_eq!(parsed.TEST_DIRECT_DEFAULT_INT, 333333);
}

// -----------------------------------------------------------------------------
// Sequences

#[derive(EnvShape, Default, Debug, PartialEq)]
struct Sequences {
    pub TEST_ARRAY_1: [i32; 3],
    pub TEST_ARRAY_2: [f64; 3],
    pub TEST_ARRAY_3: [bool; 3],
    pub TEST_SLICE_1: Vec<i32>,
    pub TEST_SLICE_2: Vec<f64>,
    pub TEST_SLICE_3: Vec<bool>,
}

#[test]
fn arrays_and_lists() {
    let parsed: Sequences = parse(
        EnvConfig::new(),
        &[
            ("TEST_ARRAY_1", "1,3,5"),
            ("TEST_ARRAY_2", "2.0,4.0,6.0"),
            ("TEST_ARRAY_3", "true,false,true"),
            ("TEST_SLICE_1", "1,3,5"),
            ("TEST_SLICE_2", "2.0,4.0,6.0"),
            ("TEST_SLICE_3", "true,false,true"),
        ],
    )
    .unwrap();

    assert_eq!(
        parsed,
        Sequences {
            TEST_ARRAY_1: [1, 3, 5],
            TEST_ARRAY_2: [2.0, 4.0, 6.0],
            TEST_ARRAY_3: [true, false, true],
            TEST_SLICE_1: vec![1, 3, 5],
            TEST_SLICE_2: vec![2.0, 4.0, 6.0],
            TEST_SLICE_3: vec![true, false, true],
        }
    );
}

#[derive(EnvShape, Default, Debug)]
struct Capacity {
    pub PORTS: [u16; 3],
}

#[test]
fn array_capacity() {
    let parser = |text: &'static str, config: EnvConfig| {
        let mut target = Capacity { PORTS: [9, 9, 9] };
        EnvParser::with_source(config, source(&[("PORTS", text)]))
            .parse(&mut target)
            .map(|()| target.PORTS)
    };

    assert_eq!(parser("1,3,5", EnvConfig::new()).unwrap(), [1, 3, 5]);
    assert_eq!(parser("1,3", EnvConfig::new()).unwrap(), [1, 3, 9]);
    assert_eq!(
        parser("1,3", EnvConfig::new().with_zero_before_write(true)).unwrap(),
        [1, 3, 0]
    );

    let err = parser("1,3,5,7", EnvConfig::new()).unwrap_err();
    assert!(err.is_size_exceeded());
    assert_eq!(
        err.to_string(),
        "`PORTS`: expected source data to have length less or equal to 3, got 4"
    );
}

#[test]
fn array_capacity_checked_before_writing() {
    let mut target = Capacity { PORTS: [9, 9, 9] };
    let parser = EnvParser::with_source(EnvConfig::new(), source(&[("PORTS", "1,2,3,4")]));
    assert!(parser.parse(&mut target).is_err());
    assert_eq!(target.PORTS, [9, 9, 9]);
}

#[test]
fn element_failures_are_aggregated() {
    #[derive(EnvShape, Default, Debug)]
    struct Args {
        pub LIST: Vec<i32>,
        pub AFTER: i32,
    }

    let mut target = Args::default();
    let parser = EnvParser::with_source(
        EnvConfig::new(),
        source(&[("LIST", "1,a,3,b"), ("AFTER", "5")]),
    );
    let err = parser.parse(&mut target).unwrap_err();

    assert!(err.is_elements());
    assert_eq!(err.key(), "LIST");
    let indices: Vec<usize> = err.element_errors().iter().map(|e| e.index).collect();
    assert_eq!(indices, [1, 3]);
    assert!(err.element_errors()[0].error.is_coercion());

    // Partial results are kept, the record stops at the failing field.
    assert_eq!(target.LIST, [1, 0, 3, 0]);
    assert_eq!(target.AFTER, 0);
}

#[test]
fn custom_split() {
    let config = EnvConfig::new()
        .with_allow_empty(true)
        .with_split_fn(|text: &str| {
            if text.is_empty() {
                return Vec::new();
            }
            let text = text.strip_prefix('[').unwrap_or(text);
            let text = text.strip_suffix(']').unwrap_or(text);
            text.split(',').map(String::from).collect()
        });

    let parsed: Sequences = parse(
        config,
        &[
            ("TEST_ARRAY_1", ""),
            ("TEST_ARRAY_2", "[2.0,4.0,6.0]"),
            ("TEST_ARRAY_3", "[true,false,true]"),
            ("TEST_SLICE_1", "[1,3,5]"),
            ("TEST_SLICE_2", "[2.0,4.0,6.0]"),
            ("TEST_SLICE_3", "[true,false,true]"),
        ],
    )
    .unwrap();

    assert_eq!(parsed.TEST_ARRAY_1, [0, 0, 0]);
    assert_eq!(parsed.TEST_ARRAY_2, [2.0, 4.0, 6.0]);
    assert_eq!(parsed.TEST_SLICE_1, [1, 3, 5]);
    assert_eq!(parsed.TEST_SLICE_3, [true, false, true]);
}

// -----------------------------------------------------------------------------
// Records

#[test]
fn nested_record() {
    #[derive(EnvShape, Default, Debug, PartialEq)]
    struct Inline {
        pub TEST_STRUCT_STRING: String,
        pub TEST_STRUCT_INT: i32,
    }

    #[derive(EnvShape, Default, Debug)]
    struct Args {
        pub Inline: Inline,
    }

    let parsed: Args = parse(
        EnvConfig::new(),
        &[("TEST_STRUCT_STRING", "test"), ("TEST_STRUCT_INT", "114514")],
    )
    .unwrap();

    assert_eq!(
        parsed.Inline,
        Inline {
            TEST_STRUCT_STRING: "test".into(),
            TEST_STRUCT_INT: 114514,
        }
    );
}

#[test]
fn renames_and_tag_key() {
    #[derive(EnvShape, Default)]
    struct Args {
        #[env(emp = "TEST_TAG_NAME_STRING")]
        pub Creator: String,
        #[env(emp = "name:TEST_TAG_NAME_INT", "-")]
        pub Gulu: i32,
    }

    let pairs = [("TEST_TAG_NAME_STRING", "Hexa"), ("TEST_TAG_NAME_INT", "333333")];
    let parsed: Args = parse(EnvConfig::new().with_tag_key("emp"), &pairs).unwrap();
    assert_eq!(parsed.Creator, "Hexa");
    assert_eq!(parsed.Gulu, 333333);

    // Under the default key `Creator` is looked up by its declared name and
    // `Gulu` is ignored.
    let err = parse::<Args>(EnvConfig::new(), &pairs).err().unwrap();
    assert_eq!(err.key(), "Creator");
}

#[test]
fn prefixes() {
    #[derive(EnvShape, Default, Debug, PartialEq)]
    struct Inline {
        #[env("DUANG")]
        pub Duang: String,
        pub BANGBANG: String,
    }

    #[derive(EnvShape, Default, Debug)]
    struct Args {
        #[env("prefix:LOVELY_")]
        pub CREATOR: String,
        #[env("prefix:KALA_")]
        pub GULU: i32,
        #[env("prefix:DING_DONG_")]
        pub Inline: Inline,
    }

    let pairs = [
        ("APP_LOVELY_CREATOR", "Hexa"),
        ("APP_KALA_GULU", "333333"),
        ("APP_DING_DONG_DUANG", "biubiubiu"),
        ("APP_DING_DONG_BANGBANG", "gulugulu"),
    ];
    let parsed: Args = parse(EnvConfig::new().with_key_prefix("APP_"), &pairs).unwrap();

    assert_eq!(parsed.CREATOR, "Hexa");
    assert_eq!(parsed.GULU, 333333);
    assert_eq!(
        parsed.Inline,
        Inline {
            Duang: "biubiubiu".into(),
            BANGBANG: "gulugulu".into(),
        }
    );
}

#[derive(EnvShape, Default, Debug, PartialEq)]
struct User {
    pub NAME: String,
    pub PASS: String,
}

#[derive(EnvShape, Default, Debug)]
struct Outer {
    #[env("prefix:OUTER_")]
    pub Middle: Middle,
}

#[derive(EnvShape, Default, Debug)]
struct Middle {
    pub USER_: User,
    pub TOKEN: String,
}

#[test]
fn auto_prefix_replaces_outer_prefix() {
    let pairs = [
        ("USER_NAME", "user"),
        ("USER_PASS", "pass"),
        ("OUTER_TOKEN", "t"),
        ("OUTER_USER_NAME", "wrong"),
        ("OUTER_USER_PASS", "wrong"),
    ];

    let parsed: Outer = parse(EnvConfig::new().with_auto_prefix(true), &pairs).unwrap();
    assert_eq!(parsed.Middle.USER_.NAME, "user");
    assert_eq!(parsed.Middle.USER_.PASS, "pass");
    // Siblings keep the caller's prefix.
    assert_eq!(parsed.Middle.TOKEN, "t");
}

#[test]
fn auto_prefix_off_inherits_prefix() {
    let pairs = [("OUTER_NAME", "user"), ("OUTER_PASS", "pass"), ("OUTER_TOKEN", "t")];

    let parsed: Outer = parse(EnvConfig::new(), &pairs).unwrap();
    assert_eq!(parsed.Middle.USER_.NAME, "user");
    assert_eq!(parsed.Middle.TOKEN, "t");
}

#[test]
fn ignored_and_private_fields() {
    #[derive(EnvShape, Default)]
    struct Inline {
        duang: String,
        pub BANGBANG: String,
    }

    #[derive(EnvShape, Default)]
    struct Args {
        #[env("-")]
        pub CREATOR: String,
        GULU: i32,
        pub Inline: Inline,
    }

    let mut target = Args {
        CREATOR: "before".into(),
        ..Args::default()
    };
    let parser = EnvParser::with_source(
        EnvConfig::new(),
        source(&[
            ("CREATOR", "Hexa"),
            ("GULU", "333333"),
            ("duang", "biubiubiu"),
            ("BANGBANG", "gulugulu"),
        ]),
    );
    parser.parse(&mut target).unwrap();

    assert_eq!(target.CREATOR, "before");
    assert_eq!(target.GULU, 0);
    assert_eq!(target.Inline.duang, "");
    assert_eq!(target.Inline.BANGBANG, "gulugulu");

    assert_eq!(parser.marshal(&target).unwrap(), "BANGBANG=gulugulu\n");
}

#[test]
fn zero_before_write() {
    #[derive(EnvShape, Default, Debug, PartialEq)]
    struct Inline {
        pub TEST_ZERO_FIELD_ARRAY: [i32; 2],
        pub TEST_ZERO_FIELD_SLICE: Vec<i32>,
        pub TEST_ZERO_FIELD_DYNAMIC: Dynamic,
        pub TEST_ZERO_FIELD_POINTER: Option<Box<i32>>,
    }

    #[derive(EnvShape, Default, Debug, PartialEq)]
    struct Args {
        pub TEST_ZERO_FIELD_INT: i32,
        pub Inline: Inline,
    }

    let mut target = Args {
        TEST_ZERO_FIELD_INT: 123456,
        Inline: Inline {
            TEST_ZERO_FIELD_ARRAY: [123, 456],
            TEST_ZERO_FIELD_SLICE: vec![123, 456, 789],
            TEST_ZERO_FIELD_DYNAMIC: Dynamic::Int(7),
            TEST_ZERO_FIELD_POINTER: Some(Box::new(1)),
        },
    };

    let parser = EnvParser::with_source(
        EnvConfig::new().with_zero_before_write(true),
        source(&[
            ("TEST_ZERO_FIELD_ARRAY", "114514"),
            ("TEST_ZERO_FIELD_SLICE", "114514,1919810"),
            ("TEST_ZERO_FIELD_DYNAMIC", "114514,1919810"),
            ("TEST_ZERO_FIELD_POINTER", "2"),
            ("TEST_ZERO_FIELD_INT", "12210"),
        ]),
    );
    parser.parse(&mut target).unwrap();

    assert_eq!(
        target,
        Args {
            TEST_ZERO_FIELD_INT: 12210,
            Inline: Inline {
                TEST_ZERO_FIELD_ARRAY: [114514, 0],
                TEST_ZERO_FIELD_SLICE: vec![114514, 1919810],
                TEST_ZERO_FIELD_DYNAMIC: Dynamic::Text("114514,1919810".into()),
                TEST_ZERO_FIELD_POINTER: Some(Box::new(2)),
            },
        }
    );
}

#[test]
fn maps_are_rejected() {
    #[derive(EnvShape, Default)]
    struct Args {
        pub BEFORE: i32,
        pub MAP: BTreeMap<String, String>,
    }

    let err = parse::<Args>(EnvConfig::new(), &[("BEFORE", "1"), ("MAP", "a=1")])
        .err()
        .unwrap();
    assert!(err.is_unsupported());
    assert_eq!(err.key(), "MAP");
}
