//! Typed records served by the content-delivery backend.
//!
//! The navigation core never looks at these; only section renderers and the
//! content sources in `folio-api` do. Field names follow the backend's
//! GraphQL schema, hence the camelCase renames.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A typed query identifying one kind of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentQuery {
    WorkHistory,
    Education,
    Testimonials,
    DesignSkills,
    CodingSkills,
    PortfolioProjects,
    Certifications,
    Blogs,
    AboutServices,
    AboutClients,
}

impl ContentQuery {
    pub const ALL: [ContentQuery; 10] = [
        ContentQuery::WorkHistory,
        ContentQuery::Education,
        ContentQuery::Testimonials,
        ContentQuery::DesignSkills,
        ContentQuery::CodingSkills,
        ContentQuery::PortfolioProjects,
        ContentQuery::Certifications,
        ContentQuery::Blogs,
        ContentQuery::AboutServices,
        ContentQuery::AboutClients,
    ];

    /// Name used on the command line and in logs.
    pub fn name(self) -> &'static str {
        match self {
            ContentQuery::WorkHistory => "work-history",
            ContentQuery::Education => "education",
            ContentQuery::Testimonials => "testimonials",
            ContentQuery::DesignSkills => "design-skills",
            ContentQuery::CodingSkills => "coding-skills",
            ContentQuery::PortfolioProjects => "portfolio-projects",
            ContentQuery::Certifications => "certifications",
            ContentQuery::Blogs => "blogs",
            ContentQuery::AboutServices => "about-services",
            ContentQuery::AboutClients => "about-clients",
        }
    }

    /// Top-level field of the GraphQL `data` object (and of the static content file).
    pub fn root_field(self) -> &'static str {
        match self {
            ContentQuery::WorkHistory => "works",
            ContentQuery::Education => "educations",
            ContentQuery::Testimonials => "testimonials",
            ContentQuery::DesignSkills => "designskills",
            ContentQuery::CodingSkills => "codingskills",
            ContentQuery::PortfolioProjects => "portfolios",
            ContentQuery::Certifications => "certifications",
            ContentQuery::Blogs => "blogs",
            ContentQuery::AboutServices => "aboutServices",
            ContentQuery::AboutClients => "aboutClients",
        }
    }

    /// GraphQL selection sent to the backend.
    pub fn graphql(self) -> &'static str {
        match self {
            ContentQuery::WorkHistory => "query WorkHistory { works { date title company description } }",
            ContentQuery::Education => "query Education { educations { date title institution description } }",
            ContentQuery::Testimonials => "query Testimonials { testimonials { name position image { url } text } }",
            ContentQuery::DesignSkills => "query DesignSkills { designskills { name percentage } }",
            ContentQuery::CodingSkills => "query CodingSkills { codingskills { name percentage } }",
            ContentQuery::PortfolioProjects => {
                "query PortfolioProjects { portfolios { number title subtitle category image { url } description technology { techused } } }"
            }
            ContentQuery::Certifications => {
                "query Certifications { certifications { order title issuer date category image { url } description credentialId credentialurl details skill { techused } } }"
            }
            ContentQuery::Blogs => {
                "query Blogs { blogs { order title excerpt date { day month } category image { url } content { html } tags { techused } } }"
            }
            ContentQuery::AboutServices => "query AboutServices { aboutServices { description service { title icon { url } } } }",
            ContentQuery::AboutClients => "query AboutClients { aboutClients { client { title icon { url } } } }",
        }
    }
}

impl fmt::Display for ContentQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown content kind '{0}'")]
pub struct UnknownContentQuery(pub String);

impl FromStr for ContentQuery {
    type Err = UnknownContentQuery;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ContentQuery::ALL
            .into_iter()
            .find(|query| query.name().eq_ignore_ascii_case(needle) || query.root_field().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownContentQuery(needle.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub url: String,
}

/// Technology tag attached to projects, certifications, and posts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tech {
    pub techused: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkHistory {
    pub date: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub date: String,
    pub title: String,
    pub institution: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub image: Option<Asset>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioProject {
    pub number: u32,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: Option<Asset>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technology: Vec<Tech>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub order: i32,
    pub title: String,
    pub issuer: String,
    pub date: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: Option<Asset>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub credential_id: String,
    #[serde(default, rename = "credentialurl")]
    pub credential_url: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub skill: Vec<Tech>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogDate {
    pub day: u8,
    pub month: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichText {
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub order: i32,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    pub date: BlogDate,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: Option<Asset>,
    #[serde(default)]
    pub content: Option<RichText>,
    #[serde(default)]
    pub tags: Vec<Tech>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCard {
    pub title: String,
    #[serde(default)]
    pub icon: Option<Asset>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutService {
    #[serde(default)]
    pub description: String,
    pub service: ServiceCard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutClient {
    pub client: ServiceCard,
}

/// Record set returned for a single [`ContentQuery`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ContentRecords {
    WorkHistory(Vec<WorkHistory>),
    Education(Vec<Education>),
    Testimonials(Vec<Testimonial>),
    DesignSkills(Vec<Skill>),
    CodingSkills(Vec<Skill>),
    PortfolioProjects(Vec<PortfolioProject>),
    Certifications(Vec<Certification>),
    Blogs(Vec<Blog>),
    AboutServices(Vec<AboutService>),
    AboutClients(Vec<AboutClient>),
}

impl ContentRecords {
    /// Decodes the JSON array found under the query's root field.
    pub fn from_value(query: ContentQuery, value: Value) -> Result<Self, serde_json::Error> {
        Ok(match query {
            ContentQuery::WorkHistory => ContentRecords::WorkHistory(serde_json::from_value(value)?),
            ContentQuery::Education => ContentRecords::Education(serde_json::from_value(value)?),
            ContentQuery::Testimonials => ContentRecords::Testimonials(serde_json::from_value(value)?),
            ContentQuery::DesignSkills => ContentRecords::DesignSkills(serde_json::from_value(value)?),
            ContentQuery::CodingSkills => ContentRecords::CodingSkills(serde_json::from_value(value)?),
            ContentQuery::PortfolioProjects => ContentRecords::PortfolioProjects(serde_json::from_value(value)?),
            ContentQuery::Certifications => ContentRecords::Certifications(serde_json::from_value(value)?),
            ContentQuery::Blogs => ContentRecords::Blogs(serde_json::from_value(value)?),
            ContentQuery::AboutServices => ContentRecords::AboutServices(serde_json::from_value(value)?),
            ContentQuery::AboutClients => ContentRecords::AboutClients(serde_json::from_value(value)?),
        })
    }

    /// An empty record set of the right shape for `query`.
    pub fn empty(query: ContentQuery) -> Self {
        match query {
            ContentQuery::WorkHistory => ContentRecords::WorkHistory(Vec::new()),
            ContentQuery::Education => ContentRecords::Education(Vec::new()),
            ContentQuery::Testimonials => ContentRecords::Testimonials(Vec::new()),
            ContentQuery::DesignSkills => ContentRecords::DesignSkills(Vec::new()),
            ContentQuery::CodingSkills => ContentRecords::CodingSkills(Vec::new()),
            ContentQuery::PortfolioProjects => ContentRecords::PortfolioProjects(Vec::new()),
            ContentQuery::Certifications => ContentRecords::Certifications(Vec::new()),
            ContentQuery::Blogs => ContentRecords::Blogs(Vec::new()),
            ContentQuery::AboutServices => ContentRecords::AboutServices(Vec::new()),
            ContentQuery::AboutClients => ContentRecords::AboutClients(Vec::new()),
        }
    }

    pub fn query(&self) -> ContentQuery {
        match self {
            ContentRecords::WorkHistory(_) => ContentQuery::WorkHistory,
            ContentRecords::Education(_) => ContentQuery::Education,
            ContentRecords::Testimonials(_) => ContentQuery::Testimonials,
            ContentRecords::DesignSkills(_) => ContentQuery::DesignSkills,
            ContentRecords::CodingSkills(_) => ContentQuery::CodingSkills,
            ContentRecords::PortfolioProjects(_) => ContentQuery::PortfolioProjects,
            ContentRecords::Certifications(_) => ContentQuery::Certifications,
            ContentRecords::Blogs(_) => ContentQuery::Blogs,
            ContentRecords::AboutServices(_) => ContentQuery::AboutServices,
            ContentRecords::AboutClients(_) => ContentQuery::AboutClients,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ContentRecords::WorkHistory(v) => v.len(),
            ContentRecords::Education(v) => v.len(),
            ContentRecords::Testimonials(v) => v.len(),
            ContentRecords::DesignSkills(v) | ContentRecords::CodingSkills(v) => v.len(),
            ContentRecords::PortfolioProjects(v) => v.len(),
            ContentRecords::Certifications(v) => v.len(),
            ContentRecords::Blogs(v) => v.len(),
            ContentRecords::AboutServices(v) => v.len(),
            ContentRecords::AboutClients(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn certification_decodes_backend_field_names() {
        let value = json!([{
            "order": 2,
            "title": "AWS Solutions Architect",
            "issuer": "Amazon",
            "date": "2023",
            "credentialId": "ABC-123",
            "credentialurl": "https://example.com/cred",
            "skill": [{ "techused": "aws" }]
        }]);
        let records = ContentRecords::from_value(ContentQuery::Certifications, value).expect("decode certifications");
        let ContentRecords::Certifications(certs) = records else {
            panic!("expected certification records");
        };
        assert_eq!(certs[0].credential_id, "ABC-123");
        assert_eq!(certs[0].credential_url.as_deref(), Some("https://example.com/cred"));
        assert_eq!(certs[0].skill[0].techused, "aws");
        assert!(certs[0].details.is_none());
    }

    #[test]
    fn query_parses_cli_names_and_root_fields() {
        assert_eq!("work-history".parse::<ContentQuery>(), Ok(ContentQuery::WorkHistory));
        assert_eq!("portfolios".parse::<ContentQuery>(), Ok(ContentQuery::PortfolioProjects));
        assert!("unknown".parse::<ContentQuery>().is_err());
    }

    #[test]
    fn empty_records_keep_their_query() {
        for query in ContentQuery::ALL {
            let empty = ContentRecords::empty(query);
            assert_eq!(empty.query(), query);
            assert!(empty.is_empty());
        }
    }
}
