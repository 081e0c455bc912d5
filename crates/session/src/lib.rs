//! # nvr-session
//!
//! Viewer state for browsing an NVR archive: which month the calendar
//! shows, which day and clip are open, how far the timeline is zoomed, and
//! what the player is doing.
//!
//! All state lives in a [`Session`] and changes only through
//! [`Command`]s; each command returns the [`Event`]s it caused. Commands
//! the current state does not allow (a day with no recordings, a clip from
//! another day, play with nothing loaded) are answered with
//! [`Event::Rejected`] and change nothing.
//!
//! # Quick start
//!
//! ```
//! use nvr_calendar::{Date, YearMonth};
//! use nvr_session::{Command, Event, Session};
//! use nvr_store::{MockConfig, generate};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let today = Date::new(2026, 10, 19).unwrap();
//! let store = generate(today, &MockConfig::default(), &mut StdRng::seed_from_u64(1)).unwrap();
//! let mut session = Session::new(store, today.year_month());
//!
//! let events = session.apply(Command::SelectDate { date: today.pred().unwrap() });
//! assert!(matches!(events[0], Event::DateSelected { .. }));
//! assert!(session.timeline().unwrap().is_some());
//!
//! // Today itself has no recordings.
//! let events = session.apply(Command::SelectDate { date: today });
//! assert!(matches!(events[0], Event::Rejected { .. }));
//! ```
//!
//! # State machine
//!
//! ```text
//!            select_date(d), d has recordings
//! Browsing ─────────────────────────────────▶ Viewing { d, first clip of d }
//!    ▲                                           │   │
//!    │            back_to_calendar               │   │ select_recording(r), r on d
//!    └───────────────────────────────────────────┘   └──▶ Viewing { d, r }
//! ```
//!
//! | Module      | Purpose                                            |
//! |-------------|----------------------------------------------------|
//! | `selection` | `Selection` state machine                          |
//! | `transport` | Play/pause, volume, speed, seek                    |
//! | `command`   | `Command` and `Event` messages                     |
//! | `view`      | Timeline view with per-clip layout                 |
//! | `session`   | `Session` controller tying everything to a store   |

mod command;
mod error;
mod selection;
mod session;
mod transport;
mod view;

pub use command::{Command, Event};
pub use error::{SelectionError, SessionError, TransportError};
pub use selection::Selection;
pub use session::Session;
pub use transport::{SPEEDS, Transport, format_time};
pub use view::{ClipView, TimelineView};
