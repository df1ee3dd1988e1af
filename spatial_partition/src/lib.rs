/*!
# Spatial Partition

Fixed-depth spatial partition trees (quad-tree in 2-D, oct-tree in 3-D)
for broad-phase "what is near this moving object" queries.

The tree is built once from a world center, half-size, and depth. Its
leaves form a dense grid linked by neighbor handles, and every tracked
object is indexed in each leaf its bounding box overlaps. Moving an
object re-indexes it with two descents plus a walk over the covered
leaves.

## Architecture

- **SpatialVector**: dimension abstraction over `glam::Vec2` / `glam::Vec3`
- **BoundedObject**: capability of reporting a center and half-extent
- **PartitionNode**: one cell of the decomposition (arena-allocated)
- **PartitionTree**: node arena, leaf grid, membership index, public API
- **SpatialIndex**: broad-phase trait implemented by the tree

The tree returns *candidates* (objects sharing a leaf), not resolved
intersections; narrow-phase testing is left to the host.
*/

// Internal modules
mod error;
pub mod log;
pub mod math;
pub mod bounds;
pub mod tree;

// Main spatial namespace module
pub mod spatial {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types and global logger functions)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger, log, log_detailed,
        };
    }

    // Dimension abstraction
    pub mod math {
        pub use crate::math::*;
    }

    // Bounded objects
    pub mod bounds {
        pub use crate::bounds::*;
    }

    // Partition tree
    pub mod tree {
        pub use crate::tree::*;
    }
}

// Re-export math library at crate root
pub use glam;
