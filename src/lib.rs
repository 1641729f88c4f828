//! Easybox: axis-aligned bounding boxes for detection post-processing.
//!
//! A [`Bbox`] stores a single validated layout (Pascal VOC style
//! `left, top, right, bottom`, top-left origin, inclusive far edges) and
//! converts to and from the formats used across computer-vision tooling:
//! COCO, YOLO, center/width/height and their normalized variants. It also
//! provides the geometry needed after a detector runs (union, intersection,
//! IoU, point distance) and greedy [`nms()`].
//!
//! # Modules
//!
//! - [`bbox`]: The [`Bbox`] value type, conversions, transformations and geometry
//! - [`nms`](mod@nms): Non-maximum suppression over scored boxes
//! - [`error`]: Error types for easybox operations
//!
//! # Example
//!
//! ```
//! use easybox::Bbox;
//!
//! let bbox = Bbox::from_coco(&[10.0, 20.0, 20.0, 20.0]).unwrap();
//! assert_eq!(bbox.to_pascal_voc(), [10.0, 20.0, 30.0, 40.0]);
//! assert_eq!(bbox.to_yolo(101, 101), [0.2, 0.3, 0.2, 0.2]);
//!
//! let other = Bbox::new(20.0, 30.0, 40.0, 50.0).unwrap();
//! assert_eq!(bbox.intersection(&other), Some(Bbox::new(20.0, 30.0, 30.0, 40.0).unwrap()));
//! ```

pub mod bbox;
pub mod error;
pub mod nms;

pub use bbox::Bbox;
pub use error::BboxError;
pub use nms::{nms, Detection, NmsOptions, DEFAULT_IOU_THRESHOLD};
