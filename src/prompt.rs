/// System instruction asking the model for the three-field summary template.
pub const SUMMARY_SYSTEM_PROMPT: &str = "You are an assistant who summarizes conversations in the following template:\n1. 장소:\n2. 목적: 술집 or 맛집 or 스터디카페 (select one based on the context)\n3. 대화내용 요약:";

/// Line prefix carrying the meeting location.
pub const LOCATION_PREFIX: &str = "1. 장소:";

/// Line prefix carrying the meeting purpose.
pub const PURPOSE_PREFIX: &str = "2. 목적:";

/// Joins message contents in order, one per line, under the summarize instruction.
#[must_use]
pub fn build_user_prompt(messages: &[String]) -> String {
    format!(
        "Summarize the following conversation:\n{}",
        messages.join("\n")
    )
}
