//! Cyclic type/delete animation over a list of role strings.
//!
//! Each [`Typer::step`] advances one character and reports how long the
//! caller should wait before the next step, so the web layer can chain
//! timeouts without holding any logic of its own.

use crate::constants::{
    DELETE_CHAR_DELAY_MS, ROLE_GAP_DELAY_MS, ROLE_HOLD_DELAY_MS, TYPE_CHAR_DELAY_MS,
};

#[derive(Clone, Debug)]
pub struct Typer {
    roles: Vec<String>,
    role: usize,
    chars: usize,
    deleting: bool,
}

/// Result of one animation step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TyperStep {
    /// Prefix of the current role now visible.
    pub visible: String,
    /// Delay until the next step, in milliseconds.
    pub next_delay_ms: u32,
}

impl Typer {
    pub fn new(roles: Vec<String>) -> Self {
        Self {
            roles,
            role: 0,
            chars: 0,
            deleting: false,
        }
    }

    fn visible_prefix(&self) -> String {
        self.roles[self.role].chars().take(self.chars).collect()
    }

    /// Advance one character. Typing a full role holds it on screen, then
    /// deletion runs faster than typing and a short gap precedes the next
    /// role.
    pub fn step(&mut self) -> TyperStep {
        if self.roles.is_empty() {
            return TyperStep {
                visible: String::new(),
                next_delay_ms: ROLE_HOLD_DELAY_MS,
            };
        }
        let role_len = self.roles[self.role].chars().count();
        if !self.deleting {
            self.chars += 1;
            let delay = if self.chars >= role_len {
                self.chars = role_len;
                self.deleting = true;
                ROLE_HOLD_DELAY_MS
            } else {
                TYPE_CHAR_DELAY_MS
            };
            TyperStep {
                visible: self.visible_prefix(),
                next_delay_ms: delay,
            }
        } else {
            self.chars = self.chars.saturating_sub(1);
            let delay = if self.chars == 0 {
                self.deleting = false;
                self.role = (self.role + 1) % self.roles.len();
                ROLE_GAP_DELAY_MS
            } else {
                DELETE_CHAR_DELAY_MS
            };
            TyperStep {
                visible: self.visible_prefix(),
                next_delay_ms: delay,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typer(roles: &[&str]) -> Typer {
        Typer::new(roles.iter().map(|r| r.to_string()).collect())
    }

    #[test]
    fn types_one_char_at_a_time() {
        let mut t = typer(&["abc"]);
        assert_eq!(t.step().visible, "a");
        assert_eq!(t.step().visible, "ab");
        let full = t.step();
        assert_eq!(full.visible, "abc");
        assert_eq!(full.next_delay_ms, ROLE_HOLD_DELAY_MS);
    }

    #[test]
    fn deletes_faster_than_it_types() {
        let mut t = typer(&["hi"]);
        t.step();
        t.step(); // "hi" complete, now holding
        let del = t.step();
        assert_eq!(del.visible, "h");
        assert_eq!(del.next_delay_ms, DELETE_CHAR_DELAY_MS);
        assert!(DELETE_CHAR_DELAY_MS < TYPE_CHAR_DELAY_MS);
    }

    #[test]
    fn cycles_to_the_next_role_after_deleting() {
        let mut t = typer(&["ab", "xy"]);
        t.step();
        t.step(); // typed "ab"
        t.step(); // "a"
        let empty = t.step();
        assert_eq!(empty.visible, "");
        assert_eq!(empty.next_delay_ms, ROLE_GAP_DELAY_MS);
        assert_eq!(t.step().visible, "x");
    }

    #[test]
    fn wraps_around_the_role_list() {
        let mut t = typer(&["a", "b"]);
        // a: type, delete; b: type, delete; back to a
        for _ in 0..4 {
            t.step();
        }
        assert_eq!(t.step().visible, "a");
    }

    #[test]
    fn empty_role_list_idles() {
        let mut t = typer(&[]);
        let step = t.step();
        assert_eq!(step.visible, "");
    }

    #[test]
    fn multibyte_roles_step_per_char() {
        let mut t = typer(&["héllo"]);
        assert_eq!(t.step().visible, "h");
        assert_eq!(t.step().visible, "hé");
    }
}
