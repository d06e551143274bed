/*!
# Graph Algorithms

Algorithms that work on both graph representations through the [`AdjacencyList`] trait.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wdgraphs::algo::*;
```
*/

mod connectivity;
mod traversal;

use crate::prelude::*;

pub use connectivity::*;
pub use traversal::*;
