#[allow(unused_imports)]
pub use itertools::Itertools;
#[allow(unused_imports)]
pub use num_traits;

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, Context, Result};
#[allow(unused_imports)]
pub use tracing::{error, info, trace, warn};

#[allow(unused_imports)]
pub use crate::{
    core::config::*,
    hash::{
        fnv::{self, Digest128, FnvWord},
        murmur,
    },
    linalg,
    linalg::{
        geometric::*,
        interp::{bezier_cubic, lerp, lerp_independent},
        matrix::{transpose, Matrix},
        scalar::{FloatScalar, IntScalar, Scalar, SignedScalar},
        square::{determinant, inverse, SquareMatrix},
        vector::Vector,
        *,
    },
    util::assert::*,
};
