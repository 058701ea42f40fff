use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::ContentError;
use crate::i18n::{Locale, Translator};

const BUNDLED_CONTENT: &str = include_str!("../../content/portfolio.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Localized<T> {
    pub en: T,
    pub sr: T,
}

impl<T> Localized<T> {
    pub fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::En => &self.en,
            Locale::Sr => &self.sr,
        }
    }
}

/// A string that is either the same in every locale or translated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedText {
    Plain(String),
    Translated(Localized<String>),
}

impl LocalizedText {
    pub fn get(&self, locale: Locale) -> &str {
        match self {
            LocalizedText::Plain(s) => s,
            LocalizedText::Translated(l) => l.get(locale),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub industry: String,
    pub period: Localized<String>,
    pub location: Localized<String>,
    pub description: Localized<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub id: u32,
    pub category: Localized<String>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Industry {
    pub id: u32,
    pub name: Localized<String>,
    pub experience: LocalizedText,
    pub category: Localized<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub id: u32,
    pub number: String,
    pub text: Localized<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationKind {
    Formal,
    Professional,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub id: u32,
    pub degree: Localized<String>,
    pub institution: Localized<String>,
    pub period: String,
    pub location: Localized<String>,
    pub description: Localized<String>,
    #[serde(rename = "type")]
    pub kind: EducationKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageSkill {
    pub name: Localized<String>,
    pub level: Localized<String>,
    /// Percentage, 0..=100.
    pub proficiency: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hobby {
    pub name: Localized<String>,
    pub category: Localized<String>,
}

/// All résumé sections, read-only once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub experiences: Vec<Experience>,
    pub skills: Vec<SkillCategory>,
    pub industries: Vec<Industry>,
    pub achievements: Vec<Achievement>,
    pub education: Vec<Education>,
    pub languages: Vec<LanguageSkill>,
    pub hobbies: Vec<Hobby>,
}

impl Portfolio {
    /// The content compiled into the binary.
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED_CONTENT)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio = serde_json::from_str(raw)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn validate(&self) -> Result<(), ContentError> {
        unique_ids("experiences", self.experiences.iter().map(|e| e.id))?;
        unique_ids("skills", self.skills.iter().map(|s| s.id))?;
        unique_ids("industries", self.industries.iter().map(|i| i.id))?;
        unique_ids("achievements", self.achievements.iter().map(|a| a.id))?;
        unique_ids("education", self.education.iter().map(|e| e.id))?;

        if let Some(lang) = self.languages.iter().find(|l| l.proficiency > 100) {
            return Err(ContentError::Invalid(format!(
                "language '{}' has proficiency {} (max 100)",
                lang.name.en, lang.proficiency
            )));
        }
        Ok(())
    }
}

fn unique_ids(section: &str, ids: impl Iterator<Item = u32>) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::Invalid(format!(
                "duplicate id {id} in {section}"
            )));
        }
    }
    Ok(())
}

/// Renders the portfolio as a markdown document in the translator's locale.
pub fn render_markdown(portfolio: &Portfolio, t: &Translator) -> String {
    let locale = t.locale();
    let mut md = String::new();

    md.push_str(&format!("## {}\n\n", t.t("experience.title")));
    for exp in &portfolio.experiences {
        md.push_str(&format!(
            "### {} @ {} ({})\n",
            exp.title,
            exp.company,
            exp.period.get(locale)
        ));
        md.push_str(&format!(
            "*{} · {}*\n\n",
            exp.industry,
            exp.location.get(locale)
        ));
        md.push_str(exp.description.get(locale));
        md.push('\n');
        if !exp.technologies.is_empty() {
            md.push_str(&format!("\n`{}`\n", exp.technologies.join("` `")));
        }
        md.push('\n');
    }

    md.push_str(&format!("## {}\n\n", t.t("skills.title")));
    md.push_str(&format!("### {}\n", t.t("skills.technical")));
    for category in &portfolio.skills {
        md.push_str(&format!(
            "- **{}:** {}\n",
            category.category.get(locale),
            category.skills.join(", ")
        ));
    }
    md.push_str(&format!("\n### {}\n", t.t("skills.industry")));
    for industry in &portfolio.industries {
        md.push_str(&format!(
            "- {} ({}): {}\n",
            industry.name.get(locale),
            industry.category.get(locale),
            industry.experience.get(locale)
        ));
    }
    md.push_str(&format!("\n### {}\n", t.t("education.certifications")));
    for achievement in &portfolio.achievements {
        md.push_str(&format!(
            "- **{}** {}\n",
            achievement.number,
            achievement.text.get(locale)
        ));
    }

    md.push_str(&format!("\n## {}\n\n", t.t("education.title")));
    md.push_str(&format!("### {}\n", t.t("education.section")));
    for edu in &portfolio.education {
        md.push_str(&format!(
            "- **{}**, {} ({}, {})\n  {}\n",
            edu.degree.get(locale),
            edu.institution.get(locale),
            edu.period,
            edu.location.get(locale),
            edu.description.get(locale)
        ));
    }
    md.push_str(&format!("\n### {}\n", t.t("education.languages")));
    for lang in &portfolio.languages {
        md.push_str(&format!(
            "- {}: {} ({}%)\n",
            lang.name.get(locale),
            lang.level.get(locale),
            lang.proficiency
        ));
    }
    md.push_str(&format!("\n### {}\n", t.t("education.hobbies")));
    for hobby in &portfolio.hobbies {
        md.push_str(&format!(
            "- {} ({})\n",
            hobby.name.get(locale),
            hobby.category.get(locale)
        ));
    }
    md
}
