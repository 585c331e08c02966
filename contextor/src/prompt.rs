//! Prompt builders for both answer strategies.

use rag_store::RagHit;

/// Sentence the retrieval prompt asks the model to return verbatim when the
/// context does not contain the answer.
pub const FALLBACK_ANSWER: &str =
    "I'm sorry, I cannot find that specific information in the HR policy.";

/// Retrieval prompt: instructions, retrieved chunks as context, question.
///
/// # Example
/// ```
/// # use contextor::prompt::{build_grounded_prompt, FALLBACK_ANSWER};
/// let prompt = build_grounded_prompt("How many sick days?", &[]);
/// assert!(prompt.contains(FALLBACK_ANSWER));
/// assert!(prompt.ends_with("Helpful Answer:"));
/// ```
pub fn build_grounded_prompt(question: &str, hits: &[RagHit]) -> String {
    let context = hits
        .iter()
        .map(|h| h.text.trim())
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "You are a helpful HR Assistant. Use the following context from the company policy \
         to answer the employee's question.\n\
         If the answer is not in the context, say \"{FALLBACK_ANSWER}\"\n\
         \n\
         Context: {context}\n\
         \n\
         Question: {question}\n\
         \n\
         Helpful Answer:",
        question = question.trim()
    )
}

/// Full-policy prompt: instructions, the whole policy, question.
///
/// Carries no decline instruction; out-of-scope questions are left to the
/// model.
pub fn build_full_policy_prompt(question: &str, policy: &str) -> String {
    format!(
        "You are a helpful HR Assistant. Answer the employee's question using the company \
         HR policy below.\n\
         \n\
         HR Policy:\n\
         {policy}\n\
         \n\
         Question: {question}\n\
         \n\
         Answer:",
        policy = policy.trim(),
        question = question.trim()
    )
}
