/*!

The public API of the library beyond the engine itself: walking a finished
ancestor chain over a live value.

*/

pub mod walker;

pub use walker::{walk_chain, Tagged, TaggedInstance};
