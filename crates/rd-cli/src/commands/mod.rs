pub mod chat;
pub mod dh;
pub mod ore;
pub mod owod;

use serde::Serialize;
use serde_json::json;

use rd_mechanics::Reply;

/// Join trailing words into a note, or `None` when there are none.
fn join_note(words: &[String]) -> Option<String> {
    let note = words.join(" ");
    let note = note.trim();
    (!note.is_empty()).then(|| note.to_string())
}

/// Print a roll either as its reply line or, with `json`, as a document
/// holding the structured roll next to the rendered reply.
fn emit(
    system: &str,
    roll: &impl Serialize,
    reply: &Reply,
    actor: &str,
    json: bool,
) -> Result<(), String> {
    let line = reply.render(actor);
    if !json {
        println!("{line}");
        return Ok(());
    }

    let value = json!({
        "system": system,
        "roll": roll,
        "reply": line,
        "action": reply.action,
    });
    let text =
        serde_json::to_string_pretty(&value).map_err(|e| format!("JSON serialization error: {e}"))?;
    println!("{text}");
    Ok(())
}
