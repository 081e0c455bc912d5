//! # nvr-store
//!
//! Recording data model and the read-only archive store behind the
//! calendar and timeline views.
//!
//! Recordings enter through validation ([`Recording::new`] or
//! [`RawRecording`] via `TryFrom`), are grouped per day in start-time
//! order ([`DayRecordings`]), and are served through the
//! [`RecordingStore`] trait. [`InMemoryStore`] is the bundled
//! implementation; it can be loaded from JSON or filled by the seeded
//! synthetic [`generate`] function.
//!
//! # Quick start
//!
//! ```
//! use nvr_calendar::Date;
//! use nvr_store::{MockConfig, RecordingStore, SearchFilter, generate};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let today = Date::new(2026, 10, 19).unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//! let store = generate(today, &MockConfig::default(), &mut rng).unwrap();
//!
//! let yesterday = today.pred().unwrap();
//! assert!(store.dates_with_recordings().contains(&yesterday));
//! let clips = store.recordings_for_date(yesterday);
//! assert!((3..=7).contains(&clips.len()));
//!
//! let long = store.search(&SearchFilter::default().with_min_duration(120));
//! assert!(long.iter().all(|r| r.duration() >= 120));
//! ```
//!
//! # Architecture
//!
//! ```text
//! JSON ──serde──▶ RawRecording ──TryFrom──▶ Recording
//!                                              │
//!                       DayRecordings (sorted by start time)
//!                                              │
//! MockConfig + Rng ──generate()──▶ InMemoryStore: RecordingStore
//!                                              │
//!          dates_with_recordings / recordings_for_date / get / search
//! ```
//!
//! | Module      | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | `recording` | `Recording`, `RecordingId`, raw ingestion form |
//! | `day`       | Per-day grouping in start-time order           |
//! | `search`    | Cross-day filter with pagination               |
//! | `store`     | `RecordingStore` trait, `InMemoryStore`        |
//! | `mock`      | Seeded synthetic archive generator             |

mod day;
mod error;
mod mock;
mod recording;
mod search;
mod store;

pub use day::DayRecordings;
pub use error::StoreError;
pub use mock::{DEFAULT_DAYS_AGO, MockConfig, SAMPLE_VIDEO_URL, generate};
pub use recording::{RawRecording, Recording, RecordingId};
pub use search::{DEFAULT_LIMIT, SearchFilter};
pub use store::{DaySummary, InMemoryStore, RecordingStore};
