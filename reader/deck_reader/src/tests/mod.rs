//! End-to-end tests that drive the reader the way a domain record
//! parser does: a keyword loop of probes, typed field pulls inside the
//! matching branch, and commit errors at the top level.

mod records;
