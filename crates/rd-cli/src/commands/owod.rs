use rd_mechanics::{Engine, EngineConfig, OwodRequest, Reply};

pub fn run(
    config: EngineConfig,
    pool: i64,
    difficulty: Option<i64>,
    note: &[String],
    json: bool,
) -> Result<(), String> {
    let request = OwodRequest {
        pool,
        difficulty,
        note: super::join_note(note),
    };

    let mut engine = Engine::new(config);
    let roll = engine.owod(&request).map_err(|e| e.to_string())?;
    let reply = if roll.is_action() {
        Reply::action(roll.to_string())
    } else {
        Reply::statement(roll.to_string())
    };

    super::emit("owod", &roll, &reply, &engine.config().actor, json)
}
