//! Types of the router: the network, its segments, the weights used to
//! collapse a segment into one cost, and the search engine.
pub mod network;
pub mod router;
pub mod segment;
pub mod weights;
