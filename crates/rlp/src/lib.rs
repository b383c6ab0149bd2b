//! Canonical RLP (Recursive Length Prefix) encoding.
//!
//! [`Encodable`] gives every primitive its minimal encoding: integers are written big-endian
//! without leading zeros (zero is the empty string `0x80`), byte strings carry a short or long
//! string header and lists a short or long list header. [`RlpWriter`] assembles nested items
//! field by field using an explicit stack of list frames.
//!
//! [`Header::decode`] reads a header back, which is enough to walk an encoding item by item.

#![doc(issue_tracker_base_url = "https://github.com/txenc/txenc/issues/")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod decode;
mod encode;
mod types;
mod writer;

pub use decode::DecodeError;
pub use encode::{encode, encode_list, length_of_length, Encodable};
pub use types::{Header, EMPTY_LIST_CODE, EMPTY_STRING_CODE};
pub use writer::{RlpError, RlpWriter};
