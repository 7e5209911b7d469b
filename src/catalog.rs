use crate::models::Linter;

/// Import path of gometalinter itself. Fetched alongside the catalog so
/// the definitions extractor has a source file to scan.
pub const GOMETALINTER_PATH: &str = "github.com/alecthomas/gometalinter";

/// Import path of metalint, whose dependency closure is the second
/// reference list for classification.
pub const METALINT_PATH: &str = "github.com/mvdan/lint/cmd/metalint";

/// The fixed linter catalog. Order here is report row order.
pub fn all() -> Vec<Linter> {
    vec![
        linter("aligncheck", "aligncheck", "github.com/opennota/check/cmd/aligncheck", ""),
        linter("deadcode", "deadcode", "github.com/tsenart/deadcode", ""),
        linter("dupl", "dupl", "github.com/mibk/dupl", ""),
        linter("errcheck", "errcheck", "github.com/kisielk/errcheck", ""),
        linter("gas", "gas", "github.com/GoASTScanner/gas", ""),
        linter("goconst", "goconst", "github.com/jgautheron/goconst/cmd/goconst", ""),
        linter(
            "gocyclo",
            "gocyclo",
            "github.com/fzipp/gocyclo",
            "gometalinter uses a fork: github.com/alecthomas/gocyclo",
        ),
        linter("gofmt", "gofmt -l -s", "github.com/golang/go/src/cmd/gofmt", ""),
        linter("goimports", "goimports", "golang.org/x/tools/cmd/goimports", ""),
        linter("golint", "golint", "golang.org/x/lint/golint", ""),
        linter("gosimple", "gosimple", "honnef.co/go/tools/cmd/gosimple", ""),
        linter("gotype", "gotype", "golang.org/x/tools/cmd/gotype", ""),
        linter("ineffassign", "ineffassign", "github.com/gordonklaus/ineffassign", ""),
        linter("interfacer", "interfacer", "github.com/mvdan/interfacer/cmd/interfacer", ""),
        linter("lll", "lll", "github.com/walle/lll/cmd/lll", ""),
        linter("misspell", "misspell", "github.com/client9/misspell/cmd/misspell", ""),
        linter("safesql", "safesql", "github.com/stripe/safesql", ""),
        linter("staticcheck", "staticcheck", "honnef.co/go/tools/cmd/staticcheck", ""),
        linter("structcheck", "structcheck", "github.com/opennota/check/cmd/structcheck", ""),
        linter("unconvert", "unconvert", "github.com/mdempsky/unconvert", ""),
        linter("unparam", "unparam", "github.com/mvdan/unparam", ""),
        linter("unused", "unused", "honnef.co/go/tools/cmd/unused", ""),
        linter("varcheck", "varcheck", "github.com/opennota/check/cmd/varcheck", ""),
        // "go tool vet" appears twice on purpose: vetshadow is the same
        // binary run with --shadow. The cmd strings stay distinct so the
        // gometalinter prefix test tells them apart.
        linter("vet", "go tool vet {path}", "github.com/golang/go/src/cmd/vet", ""),
        linter(
            "vetshadow",
            "go tool vet --shadow",
            "github.com/golang/go/src/cmd/vet",
            "same linter as vet, just run with --shadow",
        ),
    ]
}

fn linter(
    name: &'static str,
    cmd: &'static str,
    path: &'static str,
    notes: &'static str,
) -> Linter {
    Linter { name, cmd, path, notes }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_is_stable() {
        let linters = all();
        assert_eq!(linters.first().unwrap().name, "aligncheck");
        assert_eq!(linters.last().unwrap().name, "vetshadow");
        assert_eq!(linters.len(), 25);
    }

    #[test]
    fn names_are_unique() {
        let linters = all();
        let mut names: Vec<_> = linters.iter().map(|l| l.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), linters.len());
    }

    // Import paths are unique except the vet/vetshadow pair, which share
    // a source path and are distinguished by cmd.
    #[test]
    fn paths_unique_except_vet_pair() {
        let linters = all();
        let mut paths: Vec<_> = linters.iter().map(|l| l.path).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), linters.len() - 1);

        let vet_entries: Vec<_> = linters
            .iter()
            .filter(|l| l.path == "github.com/golang/go/src/cmd/vet")
            .collect();
        assert_eq!(vet_entries.len(), 2);
        assert_ne!(vet_entries[0].cmd, vet_entries[1].cmd);
    }
}
