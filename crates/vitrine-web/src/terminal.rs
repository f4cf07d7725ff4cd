//! Scripted terminal intro: styled lines appear in `#terminal-body` on a
//! fixed schedule, keeping the pane scrolled to the latest line.

use web_sys as web;

use crate::dom;

struct TermLine {
    text: &'static str,
    class: &'static str,
    delay_ms: i32,
}

const SCRIPT: &[TermLine] = &[
    TermLine { text: "$ whoami", class: "t-prompt t-cmd", delay_ms: 200 },
    TermLine { text: "guest_engineer", class: "t-out", delay_ms: 600 },
    TermLine { text: "$ cat profile.json", class: "t-prompt t-cmd", delay_ms: 1100 },
    TermLine { text: "{", class: "t-out", delay_ms: 1500 },
    TermLine { text: "  \"role\": \"Systems Programmer\",", class: "t-string", delay_ms: 1750 },
    TermLine { text: "  \"education\": \"Computer Science\",", class: "t-string", delay_ms: 2000 },
    TermLine { text: "  \"focus\": \"Security & Tooling\",", class: "t-string", delay_ms: 2250 },
    TermLine { text: "  \"languages\": [\"Rust\",\"Python\",\"C\"],", class: "t-string", delay_ms: 2500 },
    TermLine { text: "  \"hobbies\": [\"Gaming\",\"Hardware\",\"Design\"],", class: "t-string", delay_ms: 2750 },
    TermLine { text: "  \"seeking\": \"Interesting problems\",", class: "t-warn", delay_ms: 3000 },
    TermLine { text: "}", class: "t-out", delay_ms: 3500 },
    TermLine { text: "$ cat philosophy.txt", class: "t-prompt t-cmd", delay_ms: 4000 },
    TermLine { text: "# Question everything.", class: "t-comment", delay_ms: 4400 },
    TermLine { text: "# Build with intention.", class: "t-comment", delay_ms: 4650 },
    TermLine { text: "# Ship, then polish. \u{258b}", class: "t-comment", delay_ms: 4900 },
];

pub fn init(document: &web::Document) {
    let Some(body) = document.get_element_by_id("terminal-body") else {
        return;
    };
    for line in SCRIPT {
        let body = body.clone();
        let document = document.clone();
        dom::set_timeout(
            move || {
                let Ok(span) = document.create_element("span") else {
                    return;
                };
                span.set_class_name(&format!("t-line {}", line.class));
                span.set_text_content(Some(line.text));
                let _ = body.append_child(&span);
                body.set_scroll_top(body.scroll_height());
            },
            line.delay_ms,
        );
    }
}
