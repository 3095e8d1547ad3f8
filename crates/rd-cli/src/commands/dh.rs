use rd_mechanics::{AttackKind, DhRequest, Engine, EngineConfig, Reply};

pub fn run(
    config: EngineConfig,
    test: i64,
    kind: Option<AttackKind>,
    note: &[String],
    json: bool,
) -> Result<(), String> {
    let request = DhRequest {
        test,
        kind,
        note: super::join_note(note),
    };

    let mut engine = Engine::new(config);
    let roll = engine.dh(&request).map_err(|e| e.to_string())?;
    let reply = Reply::statement(roll.to_string());

    super::emit("dh", &roll, &reply, &engine.config().actor, json)
}
