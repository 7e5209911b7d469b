//! Fixed metadata for import paths whose hosts have no usable API.

use crate::models::Repository;

use super::RepoError;

const GOLANG_TOOLS_BASE: &str = "golang.org/x/tools/";
const HONNEF_TOOLS_BASE: &str = "honnef.co/go/tools/";

pub fn golang(path: &str) -> Result<Repository, RepoError> {
    if !path.starts_with(GOLANG_TOOLS_BASE) {
        return Err(RepoError::UnrecognizedPath(path.to_string()));
    }

    Ok(Repository {
        maintainer: "Go".to_string(),
        url: "https://github.com/golang/tools".to_string(),
    })
}

pub fn honnef(path: &str) -> Result<Repository, RepoError> {
    if !path.starts_with(HONNEF_TOOLS_BASE) {
        return Err(RepoError::UnrecognizedPath(path.to_string()));
    }

    Ok(Repository {
        maintainer: "Dominik Honnef".to_string(),
        url: "https://github.com/dominikh/go-tools".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golang_tools_paths_map_to_the_tools_repo() {
        let repo = golang("golang.org/x/tools/cmd/goimports").unwrap();
        assert_eq!(repo.maintainer, "Go");
        assert_eq!(repo.url, "https://github.com/golang/tools");
    }

    #[test]
    fn honnef_paths_map_to_go_tools() {
        let repo = honnef("honnef.co/go/tools/cmd/staticcheck").unwrap();
        assert_eq!(repo.maintainer, "Dominik Honnef");
    }

    #[test]
    fn other_paths_on_those_hosts_are_rejected() {
        assert!(golang("golang.org/x/lint/golint").is_err());
        assert!(honnef("honnef.co/go/other").is_err());
    }
}
