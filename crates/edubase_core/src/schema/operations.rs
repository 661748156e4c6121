//! Operation documents and dispatch.
//!
//! Operation names are part of the external contract and must not change,
//! including the historical plural forms `getIdEstagios` and `getIdBolsas`.

use crate::model::{
    BolsaPatch, CursoPatch, EmpresaPatch, EnderecoPatch, EstagioPatch, NovaBolsa, NovaEmpresa,
    NovaPlataforma, NovoCurso, NovoEndereco, NovoEstagio, NovoProfessor, PlataformaPatch,
    ProfessorPatch, RecordId,
};
use crate::repo::{
    BolsaRepo, CursoRepo, EmpresaRepo, EnderecoRepo, EstagioRepo, PlataformaRepo, ProfessorRepo,
};
use crate::schema::Envelope;
use crate::service::{self, ResolverResult};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

/// Identifier argument shared by `getId*` and `delete*` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetId {
    pub id: RecordId,
}

/// One typed operation document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", content = "input")]
pub enum Operation {
    #[serde(rename = "getEnderecos")]
    GetEnderecos,
    #[serde(rename = "getIdEndereco")]
    GetIdEndereco(GetId),
    #[serde(rename = "criarEndereco")]
    CriarEndereco(NovoEndereco),
    #[serde(rename = "updateEndereco")]
    UpdateEndereco(EnderecoPatch),
    #[serde(rename = "deleteEndereco")]
    DeleteEndereco(GetId),

    #[serde(rename = "getPlataformas")]
    GetPlataformas,
    #[serde(rename = "getIdPlataforma")]
    GetIdPlataforma(GetId),
    #[serde(rename = "criarPlataforma")]
    CriarPlataforma(NovaPlataforma),
    #[serde(rename = "updatePlataforma")]
    UpdatePlataforma(PlataformaPatch),
    #[serde(rename = "deletePlataforma")]
    DeletePlataforma(GetId),

    #[serde(rename = "getProfessores")]
    GetProfessores,
    #[serde(rename = "getIdProfessor")]
    GetIdProfessor(GetId),
    #[serde(rename = "criarProfessor")]
    CriarProfessor(NovoProfessor),
    #[serde(rename = "updateProfessor")]
    UpdateProfessor(ProfessorPatch),
    #[serde(rename = "deleteProfessor")]
    DeleteProfessor(GetId),

    #[serde(rename = "getEmpresas")]
    GetEmpresas,
    #[serde(rename = "getIdEmpresa")]
    GetIdEmpresa(GetId),
    #[serde(rename = "criarEmpresa")]
    CriarEmpresa(NovaEmpresa),
    #[serde(rename = "updateEmpresa")]
    UpdateEmpresa(EmpresaPatch),
    #[serde(rename = "deleteEmpresa")]
    DeleteEmpresa(GetId),

    #[serde(rename = "getCursos")]
    GetCursos,
    #[serde(rename = "getIdCurso")]
    GetIdCurso(GetId),
    #[serde(rename = "criarCurso")]
    CriarCurso(NovoCurso),
    #[serde(rename = "updateCurso")]
    UpdateCurso(CursoPatch),
    #[serde(rename = "deleteCurso")]
    DeleteCurso(GetId),

    #[serde(rename = "getEstagios")]
    GetEstagios,
    #[serde(rename = "getIdEstagios")]
    GetIdEstagios(GetId),
    #[serde(rename = "criarEstagio")]
    CriarEstagio(NovoEstagio),
    #[serde(rename = "updateEstagio")]
    UpdateEstagio(EstagioPatch),
    #[serde(rename = "deleteEstagio")]
    DeleteEstagio(GetId),

    #[serde(rename = "getBolsas")]
    GetBolsas,
    #[serde(rename = "getIdBolsas")]
    GetIdBolsas(GetId),
    #[serde(rename = "criarBolsa")]
    CriarBolsa(NovaBolsa),
    #[serde(rename = "updateBolsa")]
    UpdateBolsa(BolsaPatch),
    #[serde(rename = "deleteBolsa")]
    DeleteBolsa(GetId),
}

impl Operation {
    /// Declared operation name, used as the `data` key in responses.
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetEnderecos => "getEnderecos",
            Self::GetIdEndereco(_) => "getIdEndereco",
            Self::CriarEndereco(_) => "criarEndereco",
            Self::UpdateEndereco(_) => "updateEndereco",
            Self::DeleteEndereco(_) => "deleteEndereco",
            Self::GetPlataformas => "getPlataformas",
            Self::GetIdPlataforma(_) => "getIdPlataforma",
            Self::CriarPlataforma(_) => "criarPlataforma",
            Self::UpdatePlataforma(_) => "updatePlataforma",
            Self::DeletePlataforma(_) => "deletePlataforma",
            Self::GetProfessores => "getProfessores",
            Self::GetIdProfessor(_) => "getIdProfessor",
            Self::CriarProfessor(_) => "criarProfessor",
            Self::UpdateProfessor(_) => "updateProfessor",
            Self::DeleteProfessor(_) => "deleteProfessor",
            Self::GetEmpresas => "getEmpresas",
            Self::GetIdEmpresa(_) => "getIdEmpresa",
            Self::CriarEmpresa(_) => "criarEmpresa",
            Self::UpdateEmpresa(_) => "updateEmpresa",
            Self::DeleteEmpresa(_) => "deleteEmpresa",
            Self::GetCursos => "getCursos",
            Self::GetIdCurso(_) => "getIdCurso",
            Self::CriarCurso(_) => "criarCurso",
            Self::UpdateCurso(_) => "updateCurso",
            Self::DeleteCurso(_) => "deleteCurso",
            Self::GetEstagios => "getEstagios",
            Self::GetIdEstagios(_) => "getIdEstagios",
            Self::CriarEstagio(_) => "criarEstagio",
            Self::UpdateEstagio(_) => "updateEstagio",
            Self::DeleteEstagio(_) => "deleteEstagio",
            Self::GetBolsas => "getBolsas",
            Self::GetIdBolsas(_) => "getIdBolsas",
            Self::CriarBolsa(_) => "criarBolsa",
            Self::UpdateBolsa(_) => "updateBolsa",
            Self::DeleteBolsa(_) => "deleteBolsa",
        }
    }
}

/// Executes one operation document against the given store session.
///
/// Errors never escape as `Err`: every failure is folded into the envelope
/// `errors` list so one bad operation cannot take the process down.
pub fn execute(conn: &mut Connection, op: &Operation) -> Envelope {
    let name = op.name();
    match op {
        Operation::GetEnderecos => reply(name, service::listar::<EnderecoRepo>(conn)),
        Operation::GetIdEndereco(arg) => {
            reply(name, service::buscar_por_id::<EnderecoRepo>(conn, arg.id))
        }
        Operation::CriarEndereco(input) => reply(name, service::criar::<EnderecoRepo>(conn, input)),
        Operation::UpdateEndereco(input) => {
            reply(name, service::atualizar::<EnderecoRepo, _>(conn, input))
        }
        Operation::DeleteEndereco(arg) => {
            reply(name, service::remover::<EnderecoRepo>(conn, arg.id))
        }

        Operation::GetPlataformas => reply(name, service::listar::<PlataformaRepo>(conn)),
        Operation::GetIdPlataforma(arg) => {
            reply(name, service::buscar_por_id::<PlataformaRepo>(conn, arg.id))
        }
        Operation::CriarPlataforma(input) => {
            reply(name, service::criar::<PlataformaRepo>(conn, input))
        }
        Operation::UpdatePlataforma(input) => {
            reply(name, service::atualizar::<PlataformaRepo, _>(conn, input))
        }
        Operation::DeletePlataforma(arg) => {
            reply(name, service::remover::<PlataformaRepo>(conn, arg.id))
        }

        Operation::GetProfessores => reply(name, service::listar::<ProfessorRepo>(conn)),
        Operation::GetIdProfessor(arg) => {
            reply(name, service::buscar_por_id::<ProfessorRepo>(conn, arg.id))
        }
        Operation::CriarProfessor(input) => {
            reply(name, service::criar::<ProfessorRepo>(conn, input))
        }
        Operation::UpdateProfessor(input) => {
            reply(name, service::atualizar::<ProfessorRepo, _>(conn, input))
        }
        Operation::DeleteProfessor(arg) => {
            reply(name, service::remover::<ProfessorRepo>(conn, arg.id))
        }

        Operation::GetEmpresas => reply(name, service::listar::<EmpresaRepo>(conn)),
        Operation::GetIdEmpresa(arg) => {
            reply(name, service::buscar_por_id::<EmpresaRepo>(conn, arg.id))
        }
        Operation::CriarEmpresa(input) => reply(name, service::criar::<EmpresaRepo>(conn, input)),
        Operation::UpdateEmpresa(input) => {
            reply(name, service::atualizar::<EmpresaRepo, _>(conn, input))
        }
        Operation::DeleteEmpresa(arg) => reply(name, service::remover::<EmpresaRepo>(conn, arg.id)),

        Operation::GetCursos => reply(name, service::listar::<CursoRepo>(conn)),
        Operation::GetIdCurso(arg) => {
            reply(name, service::buscar_por_id::<CursoRepo>(conn, arg.id))
        }
        Operation::CriarCurso(input) => reply(name, service::criar::<CursoRepo>(conn, input)),
        Operation::UpdateCurso(input) => {
            reply(name, service::atualizar::<CursoRepo, _>(conn, input))
        }
        Operation::DeleteCurso(arg) => reply(name, service::remover::<CursoRepo>(conn, arg.id)),

        Operation::GetEstagios => reply(name, service::listar::<EstagioRepo>(conn)),
        Operation::GetIdEstagios(arg) => {
            reply(name, service::buscar_por_id::<EstagioRepo>(conn, arg.id))
        }
        Operation::CriarEstagio(input) => reply(name, service::criar::<EstagioRepo>(conn, input)),
        Operation::UpdateEstagio(input) => {
            reply(name, service::atualizar::<EstagioRepo, _>(conn, input))
        }
        Operation::DeleteEstagio(arg) => reply(name, service::remover::<EstagioRepo>(conn, arg.id)),

        Operation::GetBolsas => reply(name, service::listar::<BolsaRepo>(conn)),
        Operation::GetIdBolsas(arg) => {
            reply(name, service::buscar_por_id::<BolsaRepo>(conn, arg.id))
        }
        Operation::CriarBolsa(input) => reply(name, service::criar::<BolsaRepo>(conn, input)),
        Operation::UpdateBolsa(input) => {
            reply(name, service::atualizar::<BolsaRepo, _>(conn, input))
        }
        Operation::DeleteBolsa(arg) => reply(name, service::remover::<BolsaRepo>(conn, arg.id)),
    }
}

fn reply<T: Serialize>(name: &'static str, result: ResolverResult<T>) -> Envelope {
    match result {
        Ok(value) => match serde_json::to_value(&value) {
            Ok(value) => Envelope::data(name, value),
            Err(err) => Envelope::fail(format!("failed to serialize {name} response: {err}")),
        },
        Err(err) => Envelope::fail(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::{GetId, Operation};

    #[test]
    fn operation_names_round_trip_through_serde() {
        let op = Operation::GetIdEstagios(GetId { id: 9 });
        let value = serde_json::to_value(&op).unwrap();
        assert_eq!(value["operation"], "getIdEstagios");
        assert_eq!(value["input"]["id"], 9);

        let parsed: Operation = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, op);
        assert_eq!(parsed.name(), "getIdEstagios");
    }

    #[test]
    fn list_operations_take_no_input() {
        let parsed: Operation =
            serde_json::from_str(r#"{"operation": "getProfessores"}"#).unwrap();
        assert_eq!(parsed, Operation::GetProfessores);
    }
}
