//! One-shot user-visible messages carried across a redirect.
//!
//! Only the short code travels in the cookie; the text is resolved here so
//! the client can never inject arbitrary markup into a page.

use crate::assignment::AssignmentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    AccessDenied,
    WrongPassword,
    NoGroups,
    TrackFull,
    InvalidForm,
    RegistrationFailed,
    TrackCreated,
    TrackDeleted,
    StudentDeleted,
    StudentMoved,
    GroupFull,
    NotFound,
    ActionFailed,
}

const ALL: [Flash; 13] = [
    Flash::AccessDenied,
    Flash::WrongPassword,
    Flash::NoGroups,
    Flash::TrackFull,
    Flash::InvalidForm,
    Flash::RegistrationFailed,
    Flash::TrackCreated,
    Flash::TrackDeleted,
    Flash::StudentDeleted,
    Flash::StudentMoved,
    Flash::GroupFull,
    Flash::NotFound,
    Flash::ActionFailed,
];

impl Flash {
    /// Stable cookie-safe identifier.
    pub fn code(self) -> &'static str {
        match self {
            Flash::AccessDenied => "access_denied",
            Flash::WrongPassword => "wrong_password",
            Flash::NoGroups => "no_groups",
            Flash::TrackFull => "track_full",
            Flash::InvalidForm => "invalid_form",
            Flash::RegistrationFailed => "registration_failed",
            Flash::TrackCreated => "track_created",
            Flash::TrackDeleted => "track_deleted",
            Flash::StudentDeleted => "student_deleted",
            Flash::StudentMoved => "student_moved",
            Flash::GroupFull => "group_full",
            Flash::NotFound => "not_found",
            Flash::ActionFailed => "action_failed",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        ALL.into_iter().find(|f| f.code() == code)
    }

    /// Text shown to the user.
    pub fn message(self) -> &'static str {
        match self {
            Flash::AccessDenied => "Acesso negado. Faça login primeiro.",
            Flash::WrongPassword => "Senha incorreta.",
            Flash::NoGroups => "Nenhum grupo cadastrado neste eixo ainda.",
            Flash::TrackFull => "Todas as equipes deste eixo atingiram o limite!",
            Flash::InvalidForm => "Dados inválidos. Confira os campos e tente novamente.",
            Flash::RegistrationFailed => "Erro ao processar sua inscrição.",
            Flash::TrackCreated => "Eixo criado com sucesso.",
            Flash::TrackDeleted => "Eixo excluído.",
            Flash::StudentDeleted => "Aluno excluído.",
            Flash::StudentMoved => "Aluno movido de equipe.",
            Flash::GroupFull => "A equipe de destino já está cheia.",
            Flash::NotFound => "Registro não encontrado.",
            Flash::ActionFailed => "Não foi possível concluir a operação.",
        }
    }

    /// Errors render in the alert style, confirmations in the success style.
    pub fn is_error(self) -> bool {
        !matches!(
            self,
            Flash::TrackCreated | Flash::TrackDeleted | Flash::StudentDeleted | Flash::StudentMoved
        )
    }
}

impl From<AssignmentError> for Flash {
    fn from(err: AssignmentError) -> Self {
        match err {
            AssignmentError::NoGroups => Flash::NoGroups,
            AssignmentError::TrackFull => Flash::TrackFull,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_code_resolves_back() {
        for flash in ALL {
            assert_eq!(Flash::from_code(flash.code()), Some(flash));
        }
    }

    #[test]
    fn codes_are_unique() {
        let codes: HashSet<_> = ALL.iter().map(|f| f.code()).collect();
        assert_eq!(codes.len(), ALL.len());
    }

    #[test]
    fn unknown_code_is_ignored() {
        assert_eq!(Flash::from_code("<script>"), None);
        assert_eq!(Flash::from_code(""), None);
    }

    #[test]
    fn assignment_errors_map_to_messages() {
        assert_eq!(
            Flash::from(AssignmentError::TrackFull).message(),
            "Todas as equipes deste eixo atingiram o limite!"
        );
        assert_eq!(
            Flash::from(AssignmentError::NoGroups).message(),
            "Nenhum grupo cadastrado neste eixo ainda."
        );
    }

    #[test]
    fn confirmations_are_not_errors() {
        assert!(!Flash::StudentMoved.is_error());
        assert!(Flash::GroupFull.is_error());
    }
}
