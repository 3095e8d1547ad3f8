use rd_mechanics::{Engine, EngineConfig, OreRequest, Reply};

pub fn run(
    config: EngineConfig,
    dice: i64,
    call: Option<i64>,
    expert: Option<i64>,
    note: &[String],
    json: bool,
) -> Result<(), String> {
    let request = OreRequest {
        dice,
        call,
        expert,
        note: super::join_note(note),
    };

    let mut engine = Engine::new(config);
    let roll = engine.ore(&request).map_err(|e| e.to_string())?;
    let reply = Reply::statement(roll.to_string());

    super::emit("ore", &roll, &reply, &engine.config().actor, json)
}
