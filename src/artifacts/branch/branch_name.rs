use serde::Serialize;

const LOCAL_PREFIX: &str = "refs/heads/";
const REMOTE_PREFIX: &str = "refs/remotes/";
const HEAD_MARKER: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchEntry {
    pub name: String,
    pub commit_id: String,
    pub is_head: bool,
    pub is_remote: bool,
}

impl BranchEntry {
    pub fn parse_for_each_ref(output: &str) -> Vec<Self> {
        output
            .lines()
            .filter_map(|line| {
                let mut fields = line.splitn(3, '|');
                let commit_id = fields.next()?;
                let ref_name = fields.next()?;
                let head = fields.next().unwrap_or_default();

                let (name, is_remote) = if let Some(name) = ref_name.strip_prefix(LOCAL_PREFIX) {
                    (name, false)
                } else if let Some(name) = ref_name.strip_prefix(REMOTE_PREFIX) {
                    (name, true)
                } else {
                    (ref_name, false)
                };

                Some(BranchEntry {
                    name: name.to_string(),
                    commit_id: commit_id.to_string(),
                    is_head: head.trim() == HEAD_MARKER,
                    is_remote,
                })
            })
            .collect()
    }
}

impl std::fmt::Display for BranchEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_remote {
            write!(f, "remotes/{}", self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}
