use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupCategory {
    Technology,
    Education,
    #[serde(rename = "NEET")]
    Neet,
    #[serde(rename = "JEE")]
    Jee,
    Coding,
    Health,
    Entertainment,
    #[serde(rename = "College Life")]
    CollegeLife,
    Others,
}

impl GroupCategory {
    pub const ALL: [GroupCategory; 9] = [
        GroupCategory::Technology,
        GroupCategory::Education,
        GroupCategory::Neet,
        GroupCategory::Jee,
        GroupCategory::Coding,
        GroupCategory::Health,
        GroupCategory::Entertainment,
        GroupCategory::CollegeLife,
        GroupCategory::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupCategory::Technology => "Technology",
            GroupCategory::Education => "Education",
            GroupCategory::Neet => "NEET",
            GroupCategory::Jee => "JEE",
            GroupCategory::Coding => "Coding",
            GroupCategory::Health => "Health",
            GroupCategory::Entertainment => "Entertainment",
            GroupCategory::CollegeLife => "College Life",
            GroupCategory::Others => "Others",
        }
    }
}

impl FromStr for GroupCategory {
    type Err = ();

    // 精确匹配，区分大小写
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for GroupCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupPrivacy {
    Public,
    Private,
    Restricted,
}

impl GroupPrivacy {
    pub const ALL: [GroupPrivacy; 3] = [
        GroupPrivacy::Public,
        GroupPrivacy::Private,
        GroupPrivacy::Restricted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupPrivacy::Public => "public",
            GroupPrivacy::Private => "private",
            GroupPrivacy::Restricted => "restricted",
        }
    }
}

impl FromStr for GroupPrivacy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(GroupPrivacy::Public),
            "private" => Ok(GroupPrivacy::Private),
            "restricted" => Ok(GroupPrivacy::Restricted),
            _ => Err(()),
        }
    }
}

impl fmt::Display for GroupPrivacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
