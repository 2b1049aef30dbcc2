//! System prompt template for the assistant.

use chrono::{DateTime, Utc};

/// Build the system prompt, embedding the current wall-clock time.
///
/// The time is baked in when a session's history is first created, so a
/// long-lived session keeps the timestamp from its first turn.
pub fn build_system_prompt(now: DateTime<Utc>) -> String {
    format!(
        r#"You are a smart personal assistant.
If you know the answer to a question, answer it directly in plain English.
If the answer requires real-time, local, or up-to-date information, or if you don't know the answer, use the available tools to find it.
You have access to the following tool:
webSearch(query: string): Use this to search the internet for current or unknown information.
Decide when to use your own knowledge and when to use the tool.
Do not mention the tool unless needed.

Examples:
Q: What is the capital of France?
A: The capital of France is Paris.

Q: What's the weather in Mumbai right now?
A: (use the search tool to find the latest weather)

Q: Who is the Prime Minister of India?
A: The current Prime Minister of India is Narendra Modi.

Q: Tell me the latest IT news.
A: (use the search tool to get the latest news)

current date and time: {now}"#,
        now = now.to_rfc2822()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn prompt_embeds_the_given_time() {
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 30, 0).unwrap();
        let prompt = build_system_prompt(now);
        assert!(prompt.contains("current date and time:"));
        assert!(prompt.contains("15 Jan 2025"));
        assert!(prompt.contains("webSearch(query: string)"));
    }
}
