//! REM-style date patterns, as written between the braces of a recurrence line.
//!
//! | Pattern        | Meaning                                  |
//! |----------------|------------------------------------------|
//! | `{22}`         | the 22nd of every month                  |
//! | `{1 15}`       | the 1st and the 15th of every month      |
//! | `{Mon}`        | every Monday                             |
//! | `{Mon Wed Fri}`| every Monday, Wednesday and Friday       |
//! | `{Nov 22}`     | every 22 November                        |
//! | `{Nov 22 2007}`| 22 November 2007 only                    |
//! | `{Dec 01 +3}`  | also on the days before (`+N` covers N-1)|
//! | `{Nov 27 *5}`  | also on the days after (`*N` covers N-1) |

mod calendar;
mod dispatch;
mod matchers;
mod modifiers;
mod names;
mod pattern_kind;
mod verdict;

pub use dispatch::{classify, evaluate};
pub use modifiers::{Modifiers, extract_repeat, extract_warning};
pub use pattern_kind::PatternKind;
pub use verdict::{MatchResult, Verdict};
