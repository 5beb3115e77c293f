//! Static seed tables for the knowledge base.
//!
//! Names here are written in their canonical display form. `KnowledgeBase::new`
//! normalizes every skill list before it is used for matching.

pub(super) struct CareerSeed {
    pub title: &'static str,
    pub required: &'static [&'static str],
    pub preferred: &'static [&'static str],
    pub description: &'static str,
    pub salary_range: &'static str,
    pub demand: &'static str,
}

pub(super) struct TechnologySeed {
    pub name: &'static str,
    pub category: &'static str,
    pub prerequisites: &'static [&'static str],
    pub difficulty: &'static str,
    pub learning_time: &'static str,
    pub job_relevance: &'static str,
}

pub(super) struct ResourceSeed {
    pub title: &'static str,
    pub provider: &'static str,
    pub skills: &'static [&'static str],
    pub difficulty: &'static str,
    pub duration: &'static str,
    pub url: &'static str,
    pub kind: &'static str,
}

pub(super) struct ProjectSeed {
    pub title: &'static str,
    pub skills: &'static [&'static str],
    pub difficulty: &'static str,
    pub description: &'static str,
    pub estimated_time: &'static str,
    pub learning_goals: &'static [&'static str],
}

// ────────────────────────────────────────────────────────────────────────────
// Career paths (ranking ties keep this order)
// ────────────────────────────────────────────────────────────────────────────

pub(super) const CAREER_PATHS: &[CareerSeed] = &[
    CareerSeed {
        title: "Full Stack Developer",
        required: &["JavaScript", "TypeScript", "React", "Node.js", "HTML", "CSS", "SQL", "Git"],
        preferred: &["Docker", "AWS", "GraphQL", "MongoDB", "Redis"],
        description: "Builds both client-side and server-side software, handling the complete development stack.",
        salary_range: "$80k - $150k",
        demand: "High",
    },
    CareerSeed {
        title: "Backend Engineer",
        required: &["Java", "Python", "SQL", "REST APIs", "Git"],
        preferred: &["Spring Boot", "Docker", "Kubernetes", "PostgreSQL", "Redis", "RabbitMQ"],
        description: "Focuses on server-side logic, databases, API design, and system architecture.",
        salary_range: "$90k - $160k",
        demand: "High",
    },
    CareerSeed {
        title: "Frontend Developer",
        required: &["JavaScript", "TypeScript", "React", "HTML", "CSS", "Git"],
        preferred: &["Vue", "Angular", "Tailwind CSS", "Webpack", "Testing"],
        description: "Creates user interfaces with focus on user experience, accessibility, and performance.",
        salary_range: "$75k - $140k",
        demand: "High",
    },
    CareerSeed {
        title: "Data Scientist",
        required: &["Python", "Pandas", "NumPy", "Scikit-learn", "SQL", "Statistics"],
        preferred: &["TensorFlow", "PyTorch", "Jupyter", "R", "Tableau", "Spark"],
        description: "Analyzes complex data to extract insights and build predictive ML models.",
        salary_range: "$95k - $170k",
        demand: "Very High",
    },
    CareerSeed {
        title: "ML Engineer",
        required: &["Python", "TensorFlow", "PyTorch", "Scikit-learn", "Docker", "Git"],
        preferred: &["Kubernetes", "MLflow", "AWS SageMaker", "Spark", "SQL"],
        description: "Designs and deploys machine learning systems in production environments.",
        salary_range: "$110k - $200k",
        demand: "Very High",
    },
    CareerSeed {
        title: "DevOps Engineer",
        required: &["Docker", "Kubernetes", "Linux", "CI/CD", "Git", "Bash"],
        preferred: &["AWS", "Terraform", "Ansible", "Prometheus", "Grafana", "Python"],
        description: "Manages infrastructure, automation, and deployment pipelines.",
        salary_range: "$100k - $175k",
        demand: "High",
    },
    CareerSeed {
        title: "Mobile Developer",
        required: &["Swift", "Kotlin", "Git", "REST APIs"],
        preferred: &["React Native", "Flutter", "Firebase", "iOS", "Android"],
        description: "Creates native and cross-platform mobile applications.",
        salary_range: "$85k - $155k",
        demand: "Medium-High",
    },
    CareerSeed {
        title: "Security Engineer",
        required: &["Python", "Linux", "Networking", "Security", "Git"],
        preferred: &["Penetration Testing", "OWASP", "Cryptography", "AWS Security", "SIEM"],
        description: "Protects systems and data through security analysis and implementation.",
        salary_range: "$100k - $180k",
        demand: "Very High",
    },
    CareerSeed {
        title: "Cloud Architect",
        required: &["AWS", "Docker", "Kubernetes", "Terraform", "Networking"],
        preferred: &["Azure", "GCP", "Microservices", "Serverless", "Security"],
        description: "Designs and implements scalable cloud infrastructure solutions.",
        salary_range: "$130k - $220k",
        demand: "Very High",
    },
    CareerSeed {
        title: "Data Engineer",
        required: &["Python", "SQL", "Spark", "ETL", "Git"],
        preferred: &["Airflow", "Kafka", "AWS", "Databricks", "dbt"],
        description: "Builds and maintains data pipelines and infrastructure for analytics.",
        salary_range: "$95k - $165k",
        demand: "High",
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Technology prerequisite graph
// ────────────────────────────────────────────────────────────────────────────

pub(super) const TECHNOLOGIES: &[TechnologySeed] = &[
    TechnologySeed {
        name: "React",
        category: "Frontend",
        prerequisites: &["JavaScript", "HTML", "CSS"],
        difficulty: "Intermediate",
        learning_time: "2-3 months",
        job_relevance: "Very High",
    },
    TechnologySeed {
        name: "TypeScript",
        category: "Language",
        prerequisites: &["JavaScript"],
        difficulty: "Intermediate",
        learning_time: "1-2 months",
        job_relevance: "Very High",
    },
    TechnologySeed {
        name: "Docker",
        category: "DevOps",
        prerequisites: &["Linux basics", "CLI"],
        difficulty: "Intermediate",
        learning_time: "2-4 weeks",
        job_relevance: "Very High",
    },
    TechnologySeed {
        name: "Kubernetes",
        category: "DevOps",
        prerequisites: &["Docker", "Linux", "Networking"],
        difficulty: "Advanced",
        learning_time: "2-3 months",
        job_relevance: "High",
    },
    TechnologySeed {
        name: "AWS",
        category: "Cloud",
        prerequisites: &["Networking basics", "Linux"],
        difficulty: "Intermediate-Advanced",
        learning_time: "3-6 months",
        job_relevance: "Very High",
    },
    TechnologySeed {
        name: "PostgreSQL",
        category: "Database",
        prerequisites: &["SQL basics"],
        difficulty: "Intermediate",
        learning_time: "1-2 months",
        job_relevance: "High",
    },
    TechnologySeed {
        name: "GraphQL",
        category: "API",
        prerequisites: &["REST APIs", "JavaScript"],
        difficulty: "Intermediate",
        learning_time: "2-4 weeks",
        job_relevance: "Medium-High",
    },
    TechnologySeed {
        name: "TensorFlow",
        category: "ML",
        prerequisites: &["Python", "NumPy", "Math basics"],
        difficulty: "Advanced",
        learning_time: "3-6 months",
        job_relevance: "High",
    },
    TechnologySeed {
        name: "Spring Boot",
        category: "Backend",
        prerequisites: &["Java", "OOP"],
        difficulty: "Intermediate",
        learning_time: "2-3 months",
        job_relevance: "High",
    },
    TechnologySeed {
        name: "Node.js",
        category: "Backend",
        prerequisites: &["JavaScript"],
        difficulty: "Intermediate",
        learning_time: "1-2 months",
        job_relevance: "Very High",
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Learning resource catalog
// ────────────────────────────────────────────────────────────────────────────

pub(super) const LEARNING_RESOURCES: &[ResourceSeed] = &[
    ResourceSeed {
        title: "The Complete Web Developer Bootcamp",
        provider: "Udemy",
        skills: &["HTML", "CSS", "JavaScript", "React", "Node.js"],
        difficulty: "Beginner",
        duration: "50+ hours",
        url: "https://udemy.com",
        kind: "Course",
    },
    ResourceSeed {
        title: "AWS Certified Solutions Architect",
        provider: "AWS",
        skills: &["AWS", "Cloud", "Networking"],
        difficulty: "Intermediate",
        duration: "40+ hours",
        url: "https://aws.amazon.com/training",
        kind: "Certification",
    },
    ResourceSeed {
        title: "Machine Learning Specialization",
        provider: "Coursera (Stanford)",
        skills: &["Python", "TensorFlow", "ML", "NumPy"],
        difficulty: "Intermediate",
        duration: "3 months",
        url: "https://coursera.org",
        kind: "Specialization",
    },
    ResourceSeed {
        title: "Docker & Kubernetes: The Practical Guide",
        provider: "Udemy",
        skills: &["Docker", "Kubernetes", "DevOps"],
        difficulty: "Intermediate",
        duration: "23 hours",
        url: "https://udemy.com",
        kind: "Course",
    },
    ResourceSeed {
        title: "Java Programming Masterclass",
        provider: "Udemy",
        skills: &["Java", "OOP", "Spring Boot"],
        difficulty: "Beginner-Intermediate",
        duration: "80+ hours",
        url: "https://udemy.com",
        kind: "Course",
    },
    ResourceSeed {
        title: "CS50: Introduction to Computer Science",
        provider: "Harvard (edX)",
        skills: &["C", "Python", "SQL", "Algorithms"],
        difficulty: "Beginner",
        duration: "12 weeks",
        url: "https://cs50.harvard.edu",
        kind: "Course",
    },
    ResourceSeed {
        title: "Full Stack Open",
        provider: "University of Helsinki",
        skills: &["React", "Node.js", "MongoDB", "GraphQL", "TypeScript"],
        difficulty: "Intermediate",
        duration: "Self-paced",
        url: "https://fullstackopen.com",
        kind: "Course",
    },
    ResourceSeed {
        title: "System Design Primer",
        provider: "GitHub",
        skills: &["System Design", "Distributed Systems", "Databases"],
        difficulty: "Advanced",
        duration: "Self-paced",
        url: "https://github.com/donnemartin/system-design-primer",
        kind: "Resource",
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Project templates
// ────────────────────────────────────────────────────────────────────────────

pub(super) const PROJECT_TEMPLATES: &[ProjectSeed] = &[
    ProjectSeed {
        title: "Personal Portfolio Website",
        skills: &["HTML", "CSS", "JavaScript"],
        difficulty: "Beginner",
        description: "Create a responsive portfolio showcasing your projects and skills.",
        estimated_time: "1-2 weeks",
        learning_goals: &["Responsive Design", "CSS Layouts", "DOM Manipulation"],
    },
    ProjectSeed {
        title: "REST API with Authentication",
        skills: &["Node.js", "Express", "JWT", "MongoDB"],
        difficulty: "Intermediate",
        description: "Build a secure REST API with user authentication and CRUD operations.",
        estimated_time: "2-3 weeks",
        learning_goals: &["API Design", "Authentication", "Database Integration"],
    },
    ProjectSeed {
        title: "E-commerce Platform",
        skills: &["React", "Node.js", "PostgreSQL", "Stripe"],
        difficulty: "Advanced",
        description: "Full-stack e-commerce with cart, payment processing, and order management.",
        estimated_time: "4-6 weeks",
        learning_goals: &["Full Stack Development", "Payment Integration", "State Management"],
    },
    ProjectSeed {
        title: "Real-time Chat Application",
        skills: &["React", "Socket.io", "Node.js", "MongoDB"],
        difficulty: "Intermediate",
        description: "Build a real-time messaging app with rooms and private messages.",
        estimated_time: "2-3 weeks",
        learning_goals: &["WebSockets", "Real-time Communication", "State Sync"],
    },
    ProjectSeed {
        title: "ML Image Classifier",
        skills: &["Python", "TensorFlow", "Keras", "NumPy"],
        difficulty: "Intermediate",
        description: "Train a CNN model to classify images with a web interface.",
        estimated_time: "3-4 weeks",
        learning_goals: &["Deep Learning", "Model Training", "Deployment"],
    },
    ProjectSeed {
        title: "DevOps Pipeline",
        skills: &["Docker", "Kubernetes", "GitHub Actions", "AWS"],
        difficulty: "Advanced",
        description: "Set up a complete CI/CD pipeline with automated testing and deployment.",
        estimated_time: "3-4 weeks",
        learning_goals: &["CI/CD", "Container Orchestration", "Infrastructure as Code"],
    },
    ProjectSeed {
        title: "Task Management API (Spring Boot)",
        skills: &["Java", "Spring Boot", "PostgreSQL", "JPA"],
        difficulty: "Intermediate",
        description: "RESTful task management API with authentication and role-based access.",
        estimated_time: "2-3 weeks",
        learning_goals: &["Spring Framework", "JPA/Hibernate", "Security"],
    },
    ProjectSeed {
        title: "Data Dashboard",
        skills: &["Python", "Pandas", "Plotly", "Flask"],
        difficulty: "Intermediate",
        description: "Interactive dashboard visualizing data with filters and charts.",
        estimated_time: "2-3 weeks",
        learning_goals: &["Data Visualization", "Web Frameworks", "Data Processing"],
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Skill aliases, keyed by the compacted lower-case form (see `alias_key`)
// ────────────────────────────────────────────────────────────────────────────

pub(super) const SKILL_ALIASES: &[(&str, &str)] = &[
    ("js", "JavaScript"),
    ("javascript", "JavaScript"),
    ("ts", "TypeScript"),
    ("typescript", "TypeScript"),
    ("py", "Python"),
    ("python", "Python"),
    ("rb", "Ruby"),
    ("ruby", "Ruby"),
    ("go", "Go"),
    ("golang", "Go"),
    ("rs", "Rust"),
    ("rust", "Rust"),
    ("java", "Java"),
    ("cpp", "C++"),
    ("c++", "C++"),
    ("csharp", "C#"),
    ("c#", "C#"),
    ("html", "HTML"),
    ("css", "CSS"),
    ("scss", "CSS"),
    ("sass", "CSS"),
    ("react", "React"),
    ("reactjs", "React"),
    ("vue", "Vue"),
    ("vuejs", "Vue"),
    ("angular", "Angular"),
    ("angularjs", "Angular"),
    ("node", "Node.js"),
    ("nodejs", "Node.js"),
    ("express", "Express"),
    ("expressjs", "Express"),
    ("django", "Django"),
    ("flask", "Flask"),
    ("spring", "Spring Boot"),
    ("springboot", "Spring Boot"),
    ("docker", "Docker"),
    ("kubernetes", "Kubernetes"),
    ("k8s", "Kubernetes"),
    ("aws", "AWS"),
    ("azure", "Azure"),
    ("gcp", "GCP"),
    ("postgresql", "PostgreSQL"),
    ("postgres", "PostgreSQL"),
    ("mysql", "MySQL"),
    ("mongodb", "MongoDB"),
    ("mongo", "MongoDB"),
    ("redis", "Redis"),
    ("graphql", "GraphQL"),
    ("tensorflow", "TensorFlow"),
    ("pytorch", "PyTorch"),
    ("pandas", "Pandas"),
    ("numpy", "NumPy"),
    ("scikitlearn", "Scikit-learn"),
    ("sklearn", "Scikit-learn"),
    ("git", "Git"),
    ("github", "Git"),
    ("machinelearning", "ML"),
    ("deeplearning", "Deep Learning"),
    ("api", "REST APIs"),
    ("rest", "REST APIs"),
    ("restapi", "REST APIs"),
];
