#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use vc_envmap as envmap;
pub use vc_macro_utils as macro_utils;

pub use vc_envmap::{EnvConfig, EnvError, EnvParser, EnvShape, EnvSource};

#[cfg(feature = "std")]
pub use vc_envmap::{marshal, parse};
