#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use pp_reflect as reflect;
pub use pp_utils as utils;
