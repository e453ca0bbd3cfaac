//! Static portfolio content
//!
//! Everything the read-only screens display lives here, so the render
//! code stays free of copy.

pub const OWNER: &str = "Shaik Nagur Sharif";
pub const TAGLINE: &str = "SDET / QA Automation Engineer + Full-Stack Developer (3+ Years)";

pub const INTRO: &str = "I build automation frameworks, test complex systems, and am \
currently developing full-stack applications. I support backend and frontend teams, \
debug code, fix issues, and ensure quality delivery under tough timelines.";

pub const ABOUT: [&str; 3] = [
    "I'm an SDET with 3+ years of experience working on UI Automation, API Testing, \
Database Testing, and backend debugging. I'm also currently building full-stack \
applications, working with React, Node.js, TypeScript, AWS, and modern web technologies.",
    "In my projects, I handle automation framework development, UI + API + DB testing, \
debugging backend issues, and currently developing full-stack features. I fix backend \
bugs, build frontend components, and work closely with Dev, TPM, and APM teams. I've \
handled SIT, UAT, regression testing, and feature development under tight deadlines.",
    "I enjoy learning, solving technical challenges, and contributing beyond my role. \
Currently building a full-stack app while maintaining test automation expertise. A \
versatile engineer who can test, debug, automate, and develop.",
];

pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const QUICK_STATS: [Stat; 4] = [
    Stat { label: "Test Automation", value: "60%+" },
    Stat { label: "Years Experience", value: "3+" },
    Stat { label: "Frameworks Built", value: "10+" },
    Stat { label: "Time Saved", value: "40%" },
];

pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub status: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub features: &'static [&'static str],
    pub link: &'static str,
}

pub const PROJECTS: [Project; 6] = [
    Project {
        title: "Full-Stack Portfolio Website",
        category: "Full-Stack Development",
        status: "In Progress",
        description: "Modern portfolio with React, TypeScript, Vite, Tailwind CSS, and \
a premium blended design system.",
        technologies: &["React", "TypeScript", "Vite", "Tailwind CSS", "Framer Motion"],
        features: &[
            "Multi-page SPA",
            "Premium UI/UX",
            "Animations",
            "Responsive design",
            "Modern architecture",
        ],
        link: "https://github.com/ShaikNagurSharifS/bio-frontend",
    },
    Project {
        title: "UI Automation Framework (Playwright + TypeScript)",
        category: "Test Automation",
        status: "Live",
        description: "Hybrid framework using POM + BDD with reusable page objects, \
hooks, utilities, parallel execution, and cross-browser testing.",
        technologies: &["Playwright", "TypeScript", "Cucumber", "POM", "Allure Reports"],
        features: &[
            "Parallel execution",
            "Cross-browser testing",
            "Page Object Model",
            "BDD scenarios",
            "HTML/Allure reports",
        ],
        link: "https://playwright.dev/",
    },
    Project {
        title: "API Automation (Python Pytest + GraphQL)",
        category: "API Testing",
        status: "Live",
        description: "Automated GraphQL queries and mutations with schema validation, \
authentication handling, parameterized test data, and API-to-DB validation.",
        technologies: &["Python", "Pytest", "GraphQL", "Requests", "Authentication"],
        features: &[
            "GraphQL testing",
            "Schema validation",
            "Auth handling",
            "Parameterized tests",
            "API-DB validation",
        ],
        link: "https://graphql.org/",
    },
    Project {
        title: "Database Testing Framework",
        category: "Data Validation",
        status: "Live",
        description: "Validated data in PostgreSQL and DynamoDB using Python + SQL \
queries, TypeORM for DB comparison, and replicated tables for activity tracking.",
        technologies: &["PostgreSQL", "DynamoDB", "Python", "TypeORM", "SQL"],
        features: &[
            "Data validation",
            "Query execution",
            "DB comparison",
            "Activity tracking",
            "Automated assertions",
        ],
        link: "https://www.postgresql.org/",
    },
    Project {
        title: "SIT/UAT Regression Suite Automation",
        category: "E2E Testing",
        status: "Live",
        description: "Automated critical business flows reducing manual effort by 40%, \
enabling faster release delivery under 2-day SIT timelines.",
        technologies: &["Selenium", "Java", "TestNG", "Maven", "Jenkins"],
        features: &[
            "Business flow automation",
            "Regression testing",
            "Fast execution",
            "CI/CD integration",
            "40% time saved",
        ],
        link: "https://www.selenium.dev/",
    },
    Project {
        title: "Backend & Frontend Bug Fix Contribution",
        category: "Cross-Functional",
        status: "Live",
        description: "Identified code-level issues, fixed minor backend logic \
mismatches and UI alignment bugs, supporting developers to close issues faster.",
        technologies: &["Node.js", "Python", "React", "TypeScript", "Git"],
        features: &[
            "Backend debugging",
            "Frontend fixes",
            "Log analysis",
            "Code-level fixes",
            "Developer support",
        ],
        link: "https://github.com/",
    },
];

pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, 0..=100.
    pub level: u8,
}

pub struct SkillGroup {
    pub name: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_GROUPS: [SkillGroup; 5] = [
    SkillGroup {
        name: "Automation",
        skills: &[
            Skill { name: "Playwright", level: 95 },
            Skill { name: "Selenium", level: 92 },
            Skill { name: "PyTest", level: 90 },
            Skill { name: "Cucumber BDD", level: 88 },
            Skill { name: "Java TestNG", level: 85 },
            Skill { name: "Hybrid Framework", level: 93 },
        ],
    },
    SkillGroup {
        name: "API Testing",
        skills: &[
            Skill { name: "Postman", level: 95 },
            Skill { name: "REST APIs", level: 93 },
            Skill { name: "GraphQL", level: 88 },
            Skill { name: "Python Requests", level: 90 },
            Skill { name: "API Authentication", level: 87 },
            Skill { name: "Schema Validation", level: 85 },
        ],
    },
    SkillGroup {
        name: "Full-Stack",
        skills: &[
            Skill { name: "React", level: 90 },
            Skill { name: "Python", level: 92 },
            Skill { name: "TypeScript", level: 92 },
            Skill { name: "FastAPI", level: 90 },
            Skill { name: "Graphene (GraphQL)", level: 88 },
            Skill { name: "REST APIs", level: 93 },
        ],
    },
    SkillGroup {
        name: "Database",
        skills: &[
            Skill { name: "PostgreSQL", level: 90 },
            Skill { name: "DynamoDB", level: 85 },
            Skill { name: "MongoDB", level: 82 },
            Skill { name: "TypeORM", level: 88 },
            Skill { name: "SQL Queries", level: 93 },
            Skill { name: "Data Validation", level: 90 },
        ],
    },
    SkillGroup {
        name: "Tools",
        skills: &[
            Skill { name: "Git/GitHub", level: 95 },
            Skill { name: "VS Code", level: 98 },
            Skill { name: "IntelliJ IDEA", level: 90 },
            Skill { name: "AWS", level: 82 },
            Skill { name: "DBeaver", level: 88 },
            Skill { name: "Jira", level: 92 },
        ],
    },
];

pub struct ExperienceEntry {
    pub period: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

pub const EXPERIENCE: [ExperienceEntry; 1] = [ExperienceEntry {
    period: "2021 - Present",
    role: "SDET / QA Automation Engineer + Full-Stack Developer",
    company: "XYZ Company",
    location: "India",
    description: "Leading automation initiatives, building test frameworks, developing \
full-stack features, and supporting cross-functional teams in quality delivery.",
    achievements: &[
        "Built and maintained automation frameworks for UI, API, and Database testing",
        "Developed full-stack features using React, Node.js, TypeScript, and AWS",
        "Automated 60%+ of regression flows, reducing manual testing time by 40%",
        "Built backend APIs and frontend components for production applications",
        "Worked closely with Dev, TPM, and APM teams on SIT, UAT, and production releases",
        "Fixed backend and frontend bugs when developers had bandwidth issues",
        "Analyzed logs, databases, and API flows to identify and resolve critical defects",
        "Currently building a full-stack application while maintaining test automation",
    ],
    technologies: &[
        "React",
        "Node.js",
        "TypeScript",
        "Playwright",
        "Selenium",
        "Python",
        "Java",
        "GraphQL",
        "PostgreSQL",
        "DynamoDB",
        "AWS",
        "Postman",
        "Git",
        "Jira",
    ],
}];

pub struct ContactEntry {
    pub label: &'static str,
    pub value: &'static str,
}

pub const CONTACT: [ContactEntry; 4] = [
    ContactEntry {
        label: "Email",
        value: "shaiknagursharif@gmail.com",
    },
    ContactEntry {
        label: "Location",
        value: "India",
    },
    ContactEntry {
        label: "LinkedIn",
        value: "linkedin.com/in/shaiknagursharif",
    },
    ContactEntry {
        label: "GitHub",
        value: "github.com/ShaikNagurSharifS",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_levels_are_percentages() {
        for group in &SKILL_GROUPS {
            for skill in group.skills {
                assert!(skill.level <= 100, "{} out of range", skill.name);
            }
        }
    }

    #[test]
    fn every_project_names_its_stack() {
        for project in &PROJECTS {
            assert!(!project.technologies.is_empty(), "{}", project.title);
            assert!(!project.features.is_empty(), "{}", project.title);
        }
    }
}
