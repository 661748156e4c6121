use edubase_core::db::open_db_in_memory;
use edubase_core::{execute, Operation};
use serde_json::{json, Value};

fn run(conn: &mut rusqlite::Connection, doc: Value) -> edubase_core::Envelope {
    let op: Operation = serde_json::from_value(doc).unwrap();
    execute(conn, &op)
}

#[test]
fn create_returns_data_keyed_by_operation_name() {
    let mut conn = open_db_in_memory().unwrap();

    let envelope = run(
        &mut conn,
        json!({
            "operation": "criarPlataforma",
            "input": { "nome": "Udemy", "email": "a@b.com" }
        }),
    );

    assert!(envelope.errors.is_empty());
    let data = envelope.data.unwrap();
    let created = &data["criarPlataforma"];
    assert!(created["id"].as_i64().unwrap() > 0);
    assert_eq!(created["nome"], "Udemy");
    assert_eq!(created["email"], "a@b.com");
    assert_eq!(created["website"], Value::Null);
}

#[test]
fn not_found_is_reported_through_the_errors_list() {
    let mut conn = open_db_in_memory().unwrap();

    let envelope = run(
        &mut conn,
        json!({ "operation": "getIdCurso", "input": { "id": 999 } }),
    );

    assert!(envelope.data.is_none());
    assert_eq!(envelope.errors.len(), 1);
    assert!(envelope.errors[0].message.contains("Curso not found"));

    // Serialized envelopes omit the absent side entirely.
    let value = serde_json::to_value(&envelope).unwrap();
    assert!(value.get("data").is_none());
    assert!(value.get("errors").is_some());
}

#[test]
fn update_document_applies_a_partial_update() {
    let mut conn = open_db_in_memory().unwrap();

    let created = run(
        &mut conn,
        json!({
            "operation": "criarProfessor",
            "input": {
                "nome": "Alan Turing",
                "vertente": "Computation",
                "email": "alan@example.edu"
            }
        }),
    );
    let id = created.data.unwrap()["criarProfessor"]["id"]
        .as_i64()
        .unwrap();

    let updated = run(
        &mut conn,
        json!({
            "operation": "updateProfessor",
            "input": { "id": id, "telefone": "555-0202" }
        }),
    );

    let data = updated.data.unwrap();
    let professor = &data["updateProfessor"];
    assert_eq!(professor["telefone"], "555-0202");
    assert_eq!(professor["nome"], "Alan Turing");
    assert_eq!(professor["vertente"], "Computation");
    assert_eq!(professor["email"], "alan@example.edu");
}

#[test]
fn delete_acknowledges_and_subsequent_lookup_fails() {
    let mut conn = open_db_in_memory().unwrap();

    let created = run(
        &mut conn,
        json!({
            "operation": "criarEndereco",
            "input": { "rua": "Rua Um" }
        }),
    );
    let id = created.data.unwrap()["criarEndereco"]["id"].as_i64().unwrap();

    let deleted = run(
        &mut conn,
        json!({ "operation": "deleteEndereco", "input": { "id": id } }),
    );
    let data = deleted.data.unwrap();
    assert_eq!(data["deleteEndereco"]["ok"], true);
    assert_eq!(
        data["deleteEndereco"]["message"],
        "Elemento deletado com sucesso."
    );

    let missing = run(
        &mut conn,
        json!({ "operation": "getIdEndereco", "input": { "id": id } }),
    );
    assert!(missing.data.is_none());
    assert!(missing.errors[0].message.contains("Endereco not found"));
}

#[test]
fn empresa_documents_use_the_uppercase_cnpj_field() {
    let mut conn = open_db_in_memory().unwrap();

    let created = run(
        &mut conn,
        json!({
            "operation": "criarEmpresa",
            "input": { "nome": "Acme Ltda", "CNPJ": "12345678000199" }
        }),
    );
    assert!(created.errors.is_empty());
    let data = created.data.unwrap();
    assert_eq!(data["criarEmpresa"]["CNPJ"], "12345678000199");
    assert!(data["criarEmpresa"].get("cnpj").is_none());
    let id = data["criarEmpresa"]["id"].as_i64().unwrap();

    let updated = run(
        &mut conn,
        json!({
            "operation": "updateEmpresa",
            "input": { "id": id, "status": false }
        }),
    );
    let data = updated.data.unwrap();
    assert_eq!(data["updateEmpresa"]["status"], false);
    assert_eq!(data["updateEmpresa"]["CNPJ"], "12345678000199");
}

#[test]
fn date_fields_parse_from_iso_strings() {
    let mut conn = open_db_in_memory().unwrap();

    let envelope = run(
        &mut conn,
        json!({
            "operation": "criarEstagio",
            "input": {
                "nome": "Estagio de Dados",
                "remunerado": true,
                "salario": 1500.0,
                "horas_semanais": 30,
                "data_inicio": "2024-01-02",
                "data_fim": "2024-06-30"
            }
        }),
    );

    assert!(envelope.errors.is_empty());
    let data = envelope.data.unwrap();
    assert_eq!(data["criarEstagio"]["data_inicio"], "2024-01-02");
    assert_eq!(data["criarEstagio"]["data_fim"], "2024-06-30");
}

#[test]
fn dangling_reference_scenario_via_documents() {
    let mut conn = open_db_in_memory().unwrap();

    let plataforma = run(
        &mut conn,
        json!({
            "operation": "criarPlataforma",
            "input": { "nome": "Udemy", "email": "a@b.com" }
        }),
    );
    let plataforma_id = plataforma.data.unwrap()["criarPlataforma"]["id"]
        .as_i64()
        .unwrap();

    let curso = run(
        &mut conn,
        json!({
            "operation": "criarCurso",
            "input": { "nome": "Intro", "plataforma_id": plataforma_id }
        }),
    );
    let curso_id = curso.data.unwrap()["criarCurso"]["id"].as_i64().unwrap();

    let deleted = run(
        &mut conn,
        json!({ "operation": "deletePlataforma", "input": { "id": plataforma_id } }),
    );
    assert!(deleted.errors.is_empty());

    // The course still resolves, reference intact but dangling.
    let fetched = run(
        &mut conn,
        json!({ "operation": "getIdCurso", "input": { "id": curso_id } }),
    );
    let data = fetched.data.unwrap();
    assert_eq!(data["getIdCurso"]["plataforma_id"], plataforma_id);
}

#[test]
fn listing_operations_return_arrays() {
    let mut conn = open_db_in_memory().unwrap();

    for nome in ["Coursera", "edX"] {
        run(
            &mut conn,
            json!({ "operation": "criarPlataforma", "input": { "nome": nome } }),
        );
    }

    let envelope = run(&mut conn, json!({ "operation": "getPlataformas" }));
    let data = envelope.data.unwrap();
    assert_eq!(data["getPlataformas"].as_array().unwrap().len(), 2);
}
