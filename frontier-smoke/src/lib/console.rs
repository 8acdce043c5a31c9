//! Colored step-by-step narration of the smoke run.
//!
//! This is the program's user-facing output, kept separate from the
//! `tracing` diagnostics so the run reads like a checklist.

pub const RED: &str = "\x1b[0;31m";
pub const GREEN: &str = "\x1b[0;32m";
pub const YELLOW: &str = "\x1b[1;33m";
pub const BLUE: &str = "\x1b[0;34m";
pub const PURPLE: &str = "\x1b[0;35m";
pub const CYAN: &str = "\x1b[0;36m";
pub const WHITE: &str = "\x1b[1;37m";
pub const NC: &str = "\x1b[0m";

pub fn info(msg: &str) {
    println!("{BLUE}ℹ️  {msg}{NC}");
}

pub fn success(msg: &str) {
    println!("{GREEN}✅ {msg}{NC}");
}

pub fn error(msg: &str) {
    println!("{RED}❌ {msg}{NC}");
}

pub fn warning(msg: &str) {
    println!("{YELLOW}⚠️  {msg}{NC}");
}

pub fn step(msg: &str) {
    println!("{PURPLE}🔄 {msg}{NC}");
}

pub fn data(msg: &str) {
    println!("{CYAN}📋 {msg}{NC}");
}

pub fn banner(msg: &str) {
    println!("{WHITE}🚀 {msg}{NC}");
    println!("{WHITE}=================================================={NC}");
}
