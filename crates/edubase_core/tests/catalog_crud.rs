use chrono::NaiveDate;
use edubase_core::db::open_db_in_memory;
use edubase_core::{
    atualizar, buscar_por_id, criar, listar, remover, Bolsa, BolsaPatch, BolsaRepo, CursoRepo,
    EmpresaPatch, EmpresaRepo, EnderecoRepo, NovaBolsa, NovaEmpresa, NovoCurso, NovoEndereco,
    NovoEstagio, NovoProfessor, EstagioRepo, ProfessorPatch, ProfessorRepo, ResolverError,
};

fn sample_professor() -> NovoProfessor {
    NovoProfessor {
        nome: "Grace Hopper".to_string(),
        vertente: Some("Computer Science".to_string()),
        telefone: Some("555-0101".to_string()),
        email: Some("grace@example.edu".to_string()),
        website: Some("https://grace.example.edu".to_string()),
        formacao: Some("PhD".to_string()),
    }
}

#[test]
fn create_and_get_roundtrip() {
    let mut conn = open_db_in_memory().unwrap();

    let draft = NovoEndereco {
        rua: "Rua das Flores".to_string(),
        numero: Some(100),
        bairro: Some("Centro".to_string()),
        cidade: Some("Recife".to_string()),
        estado: Some("PE".to_string()),
        cep: Some("50000-000".to_string()),
    };
    let created = criar::<EnderecoRepo>(&mut conn, &draft).unwrap();
    assert!(created.id > 0);
    assert_eq!(created.rua, draft.rua);
    assert_eq!(created.numero, draft.numero);
    assert_eq!(created.cep, draft.cep);

    let fetched = buscar_por_id::<EnderecoRepo>(&conn, created.id).unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn create_roundtrip_preserves_dates_and_salary() {
    let mut conn = open_db_in_memory().unwrap();

    let draft = NovoEstagio {
        nome: "Estagio Backend".to_string(),
        vertente: Some("Computer Science".to_string()),
        salario: Some(1412.5),
        empresa_id: None,
        remunerado: Some(true),
        horas_semanais: Some(20),
        descricao: Some("manutencao de APIs".to_string()),
        data_inicio: NaiveDate::from_ymd_opt(2024, 2, 1),
        data_fim: NaiveDate::from_ymd_opt(2024, 12, 20),
    };
    let created = criar::<EstagioRepo>(&mut conn, &draft).unwrap();

    let fetched = buscar_por_id::<EstagioRepo>(&conn, created.id).unwrap();
    assert_eq!(fetched.salario, Some(1412.5));
    assert_eq!(fetched.remunerado, Some(true));
    assert_eq!(fetched.data_inicio, NaiveDate::from_ymd_opt(2024, 2, 1));
    assert_eq!(fetched.data_fim, NaiveDate::from_ymd_opt(2024, 12, 20));
}

#[test]
fn empresa_create_and_get_roundtrip() {
    let mut conn = open_db_in_memory().unwrap();

    let draft = NovaEmpresa {
        nome: "Acme Ltda".to_string(),
        vertente: Some("Computer Science".to_string()),
        cnpj: Some("12345678000199".to_string()),
        endereco_id: Some(7),
        telefone: Some("555-0303".to_string()),
        email: Some("contato@acme.example".to_string()),
        website: Some("https://acme.example".to_string()),
        status: Some(true),
    };
    let created = criar::<EmpresaRepo>(&mut conn, &draft).unwrap();
    assert!(created.id > 0);
    assert_eq!(created.nome, draft.nome);
    assert_eq!(created.cnpj, draft.cnpj);
    assert_eq!(created.endereco_id, draft.endereco_id);
    assert_eq!(created.status, draft.status);

    let fetched = buscar_por_id::<EmpresaRepo>(&conn, created.id).unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn empresa_patch_flips_status_and_nothing_else() {
    let mut conn = open_db_in_memory().unwrap();

    let created = criar::<EmpresaRepo>(
        &mut conn,
        &NovaEmpresa {
            nome: "Acme Ltda".to_string(),
            cnpj: Some("12345678000199".to_string()),
            endereco_id: Some(7),
            status: Some(true),
            ..NovaEmpresa::default()
        },
    )
    .unwrap();

    let patch = EmpresaPatch {
        id: created.id,
        status: Some(false),
        ..EmpresaPatch::default()
    };
    let updated = atualizar::<EmpresaRepo, _>(&mut conn, &patch).unwrap();

    assert_eq!(updated.status, Some(false));
    assert_eq!(updated.cnpj, created.cnpj);
    assert_eq!(updated.endereco_id, created.endereco_id);
    assert_eq!(updated.nome, created.nome);
}

#[test]
fn get_by_id_missing_returns_not_found() {
    let conn = open_db_in_memory().unwrap();

    let err = buscar_por_id::<CursoRepo>(&conn, 42).unwrap_err();
    assert!(matches!(
        err,
        ResolverError::NotFound {
            entity: "Curso",
            id: 42
        }
    ));
}

#[test]
fn partial_update_changes_exactly_the_given_fields() {
    let mut conn = open_db_in_memory().unwrap();
    let created = criar::<ProfessorRepo>(&mut conn, &sample_professor()).unwrap();

    let patch = ProfessorPatch {
        id: created.id,
        nome: Some("Grace Brewster Hopper".to_string()),
        ..ProfessorPatch::default()
    };
    let updated = atualizar::<ProfessorRepo, _>(&mut conn, &patch).unwrap();

    assert_eq!(updated.nome, "Grace Brewster Hopper");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.vertente, created.vertente);
    assert_eq!(updated.telefone, created.telefone);
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.website, created.website);
    assert_eq!(updated.formacao, created.formacao);
}

#[test]
fn all_none_patch_leaves_the_row_untouched() {
    let mut conn = open_db_in_memory().unwrap();
    let created = criar::<ProfessorRepo>(&mut conn, &sample_professor()).unwrap();

    let patch = ProfessorPatch {
        id: created.id,
        ..ProfessorPatch::default()
    };
    let updated = atualizar::<ProfessorRepo, _>(&mut conn, &patch).unwrap();
    assert_eq!(updated, created);
}

#[test]
fn update_missing_returns_not_found() {
    let mut conn = open_db_in_memory().unwrap();

    let patch = ProfessorPatch {
        id: 9999,
        nome: Some("ninguem".to_string()),
        ..ProfessorPatch::default()
    };
    let err = atualizar::<ProfessorRepo, _>(&mut conn, &patch).unwrap_err();
    assert!(matches!(
        err,
        ResolverError::NotFound {
            entity: "Professor",
            id: 9999
        }
    ));
}

#[test]
fn failed_update_leaves_the_row_in_its_prior_state() {
    let mut conn = open_db_in_memory().unwrap();
    let created = criar::<ProfessorRepo>(&mut conn, &sample_professor()).unwrap();

    // A blank required field is rejected before the write lands.
    let patch = ProfessorPatch {
        id: created.id,
        nome: Some("   ".to_string()),
        telefone: Some("555-9999".to_string()),
        ..ProfessorPatch::default()
    };
    let err = atualizar::<ProfessorRepo, _>(&mut conn, &patch).unwrap_err();
    assert!(matches!(err, ResolverError::Validation(_)));

    let fetched = buscar_por_id::<ProfessorRepo>(&conn, created.id).unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn delete_removes_the_row_and_missing_delete_is_not_found() {
    let mut conn = open_db_in_memory().unwrap();
    let created = criar::<ProfessorRepo>(&mut conn, &sample_professor()).unwrap();

    let ack = remover::<ProfessorRepo>(&mut conn, created.id).unwrap();
    assert!(ack.ok);
    assert_eq!(ack.message, "Elemento deletado com sucesso.");

    let err = buscar_por_id::<ProfessorRepo>(&conn, created.id).unwrap_err();
    assert!(matches!(err, ResolverError::NotFound { .. }));

    let other = criar::<ProfessorRepo>(&mut conn, &sample_professor()).unwrap();
    let err = remover::<ProfessorRepo>(&mut conn, other.id + 50).unwrap_err();
    assert!(matches!(err, ResolverError::NotFound { .. }));

    // The failed delete must not have touched surviving rows.
    let remaining = listar::<ProfessorRepo>(&conn).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0], other);
}

#[test]
fn update_may_break_the_salary_paid_convention() {
    let mut conn = open_db_in_memory().unwrap();

    let draft = NovaBolsa {
        nome: "Iniciacao Cientifica".to_string(),
        remunerado: Some(true),
        salario: Some(700.0),
        quantidade_vagas: Some(2),
        ..NovaBolsa::default()
    };
    let created = criar::<BolsaRepo>(&mut conn, &draft).unwrap();

    // The store only pairs remunerado and salario by convention at creation;
    // a later patch can flip one without the other.
    let patch = BolsaPatch {
        id: created.id,
        remunerado: Some(false),
        ..BolsaPatch::default()
    };
    let updated: Bolsa = atualizar::<BolsaRepo, _>(&mut conn, &patch).unwrap();
    assert_eq!(updated.remunerado, Some(false));
    assert_eq!(updated.salario, Some(700.0));
}

#[test]
fn deleting_a_referenced_row_leaves_a_dangling_id() {
    let mut conn = open_db_in_memory().unwrap();

    let plataforma = criar::<edubase_core::PlataformaRepo>(
        &mut conn,
        &edubase_core::NovaPlataforma {
            nome: "Udemy".to_string(),
            email: Some("a@b.com".to_string()),
            ..edubase_core::NovaPlataforma::default()
        },
    )
    .unwrap();

    let curso = criar::<CursoRepo>(
        &mut conn,
        &NovoCurso {
            nome: "Intro".to_string(),
            plataforma_id: Some(plataforma.id),
            ..NovoCurso::default()
        },
    )
    .unwrap();
    assert_eq!(curso.plataforma_id, Some(plataforma.id));

    remover::<edubase_core::PlataformaRepo>(&mut conn, plataforma.id).unwrap();

    // No referential integrity: the course survives with a dangling id.
    let fetched = buscar_por_id::<CursoRepo>(&conn, curso.id).unwrap();
    assert_eq!(fetched.plataforma_id, Some(plataforma.id));
}

#[test]
fn list_returns_every_row_and_empty_lists_are_fine() {
    let mut conn = open_db_in_memory().unwrap();

    assert!(listar::<EnderecoRepo>(&conn).unwrap().is_empty());

    for rua in ["Rua A", "Rua B", "Rua C"] {
        criar::<EnderecoRepo>(
            &mut conn,
            &NovoEndereco {
                rua: rua.to_string(),
                ..NovoEndereco::default()
            },
        )
        .unwrap();
    }

    let todos = listar::<EnderecoRepo>(&conn).unwrap();
    assert_eq!(todos.len(), 3);
}

#[test]
fn blank_required_field_blocks_create() {
    let mut conn = open_db_in_memory().unwrap();

    let err = criar::<ProfessorRepo>(
        &mut conn,
        &NovoProfessor {
            nome: "  ".to_string(),
            ..NovoProfessor::default()
        },
    )
    .unwrap_err();
    assert!(matches!(err, ResolverError::Validation(_)));
    assert!(listar::<ProfessorRepo>(&conn).unwrap().is_empty());
}
