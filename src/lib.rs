// model = "claude-opus-4-5"
// created = "2026-08-05"
// modified = "2026-08-06"
// driver = "Isaac Clayton"

//! Tandem - minimal mechanisms for bounded waits and shared-window buffers.
//!
//! # Quick Start
//!
//! ```
//! use tandem::buf::GrowBuf;
//!
//! // A buffer built from a literal is exactly full: len 5, cap 5.
//! let spots = GrowBuf::from_vec(vec![10, 20, 30, 40, 50]);
//!
//! // A view is a window over the same storage, with the headroom
//! // of everything past its start offset.
//! let mut window = spots.slice(1, 3).unwrap();
//! assert_eq!(window.to_vec(), vec![20, 30]);
//! assert_eq!(window.capacity(), 4);
//!
//! // Appending within that headroom lands in the shared storage.
//! window.append(99);
//! assert_eq!(spots.to_vec(), vec![10, 20, 30, 99, 50]);
//!
//! // Appending past it reallocates and disconnects the window.
//! window.append_all(&[88, 77]);
//! assert_eq!(window.to_vec(), vec![20, 30, 99, 88, 77]);
//! assert_eq!(spots.to_vec(), vec![10, 20, 30, 99, 50]);
//! ```
//!
//! The [`timed`] module is the other half: race a unit of work against a
//! deadline with [`timed::run_with_timeout`], getting back either
//! `Completed(value)` or `TimedOut` while the losing work runs on.

pub mod buf;
pub mod profiling;
pub mod timed;
