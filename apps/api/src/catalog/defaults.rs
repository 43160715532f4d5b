use crate::catalog::Catalog;
use crate::models::career::{CareerPath, SalaryRange, SkillCategory};
use crate::models::interests::WorkplacePreference::{self, Hybrid, Onsite, Remote};

/// Category order is vector component order.
const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "programming",
        &["JavaScript", "Python", "Java", "C++", "TypeScript", "Go", "Ruby", "PHP"],
    ),
    (
        "data",
        &["SQL", "NoSQL", "R", "Tableau", "Power BI", "Excel", "Statistics", "Data Mining"],
    ),
    (
        "design",
        &["Figma", "Adobe XD", "Sketch", "Photoshop", "Illustrator", "UI", "UX", "Wireframing"],
    ),
    (
        "business",
        &[
            "Project Management",
            "Agile",
            "Scrum",
            "Marketing",
            "Sales",
            "Strategy",
            "Analysis",
        ],
    ),
    (
        "devops",
        &["Docker", "Kubernetes", "AWS", "Azure", "GCP", "CI/CD", "Linux", "Git"],
    ),
    (
        "management",
        &[
            "Leadership",
            "Team Management",
            "Product Management",
            "Roadmapping",
            "Stakeholder",
        ],
    ),
    (
        "soft_skills",
        &["Communication", "Presentation", "Teamwork", "Problem-solving", "Time Management"],
    ),
    (
        "mobile",
        &["React Native", "Flutter", "Swift", "Kotlin", "Android", "iOS", "Mobile Design"],
    ),
];

struct PathSeed {
    id: &'static str,
    title: &'static str,
    skills: &'static [&'static str],
    workplace_types: &'static [WorkplacePreference],
    salary: (f64, f64),
    positions: &'static [&'static str],
    vector: [f64; 8],
}

const CAREER_PATHS: &[PathSeed] = &[
    PathSeed {
        id: "web-dev",
        title: "Web Development",
        skills: &["JavaScript", "HTML", "CSS", "React", "Node.js", "TypeScript"],
        workplace_types: &[Remote, Hybrid, Onsite],
        salary: (60000.0, 150000.0),
        positions: &["Frontend Developer", "Backend Developer", "Full Stack Developer"],
        vector: [0.9, 0.2, 0.1, 0.1, 0.1, 0.1, 0.2, 0.8],
    },
    PathSeed {
        id: "data-science",
        title: "Data Science",
        skills: &[
            "Python",
            "R",
            "SQL",
            "Statistics",
            "Machine Learning",
            "Data Visualization",
        ],
        workplace_types: &[Hybrid, Onsite],
        salary: (70000.0, 180000.0),
        positions: &["Data Scientist", "Data Analyst", "Machine Learning Engineer"],
        vector: [0.2, 0.9, 0.8, 0.2, 0.1, 0.1, 0.1, 0.1],
    },
    PathSeed {
        id: "ui-ux",
        title: "UI/UX Design",
        skills: &["Figma", "Adobe XD", "User Research", "Wireframing", "Prototyping"],
        workplace_types: &[Remote, Hybrid],
        salary: (55000.0, 140000.0),
        positions: &["UI Designer", "UX Designer", "Product Designer"],
        vector: [0.3, 0.1, 0.1, 0.9, 0.7, 0.2, 0.1, 0.1],
    },
    PathSeed {
        id: "devops",
        title: "DevOps Engineering",
        skills: &[
            "Docker",
            "Kubernetes",
            "CI/CD",
            "Cloud Services",
            "Linux",
            "Shell Scripting",
        ],
        workplace_types: &[Remote, Hybrid, Onsite],
        salary: (80000.0, 170000.0),
        positions: &["DevOps Engineer", "Site Reliability Engineer", "Cloud Engineer"],
        vector: [0.2, 0.3, 0.2, 0.1, 0.8, 0.7, 0.9, 0.2],
    },
    PathSeed {
        id: "product-management",
        title: "Product Management",
        skills: &[
            "Product Strategy",
            "User Stories",
            "Agile",
            "Market Research",
            "Roadmapping",
        ],
        workplace_types: &[Hybrid, Onsite],
        salary: (75000.0, 190000.0),
        positions: &["Product Manager", "Product Owner", "Technical Product Manager"],
        vector: [0.1, 0.2, 0.3, 0.7, 0.2, 0.9, 0.3, 0.1],
    },
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The embedded catalog: 8 skill categories and 5 career paths with
/// hand-authored reference vectors.
pub fn default_catalog() -> Catalog {
    let categories = SKILL_CATEGORIES
        .iter()
        .map(|(name, keywords)| SkillCategory {
            name: name.to_string(),
            keywords: owned(keywords),
        })
        .collect();

    let career_paths = CAREER_PATHS
        .iter()
        .map(|seed| CareerPath {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            skills: owned(seed.skills),
            workplace_types: seed.workplace_types.to_vec(),
            salary_range: SalaryRange {
                min: seed.salary.0,
                max: seed.salary.1,
            },
            positions: owned(seed.positions),
            vector: seed.vector.to_vec(),
        })
        .collect();

    Catalog {
        categories,
        career_paths,
    }
}
