#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use vc_discovery as discovery;
pub use vc_utils as utils;
