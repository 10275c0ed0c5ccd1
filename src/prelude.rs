//! This module simply brings the most common Vermilion functionality under a single namespace, to
//! prevent excessive imports. It includes [`Color`] and the types its methods take and return,
//! the [`ColorSpace`] tag, the error type, and the [`Mix`] and [`EuclideanDistance`] traits.
//! The individual structs in the [`colors`](crate::colors) module are not included.

pub use crate::color::{Color, ColorMutation, ComparisonMethod, StringFormat, StringOptions};
pub use crate::deltae::DeltaE2000Weights;
pub use crate::error::ColorError;
pub use crate::euclidean_distance::EuclideanDistance;
pub use crate::mix::Mix;
pub use crate::space::ColorSpace;
