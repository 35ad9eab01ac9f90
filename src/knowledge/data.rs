use super::{KnowledgeBase, Topic};
use crate::preprocessing::Subject;

const fn topic(area: &'static str, name: &'static str, concepts: &'static [&'static str]) -> Topic {
    Topic {
        area,
        name,
        concepts,
        formulas: &[],
        examples: &[],
    }
}

pub(super) static MATHEMATICS: KnowledgeBase = KnowledgeBase {
    subject: Subject::Mathematics,
    topics: &[
        Topic {
            area: "mathematics",
            name: "algebra",
            concepts: &["variables", "equations", "inequalities", "functions", "polynomials"],
            formulas: &[
                ("quadratic", "ax² + bx + c = 0"),
                ("slope", "m = (y₂ - y₁)/(x₂ - x₁)"),
                ("distance", "d = √[(x₂-x₁)² + (y₂-y₁)²]"),
            ],
            examples: &[
                "Solve: 2x + 5 = 13",
                "Find slope of line through (1,2) and (3,8)",
                "Factor: x² - 5x + 6",
            ],
        },
        Topic {
            area: "mathematics",
            name: "calculus",
            concepts: &["limits", "derivatives", "integrals", "series", "differential equations"],
            formulas: &[
                ("derivative", "d/dx[f(x)] = lim[h→0] (f(x+h) - f(x))/h"),
                ("chain rule", "d/dx[f(g(x))] = f'(g(x)) × g'(x)"),
                ("product rule", "d/dx[f(x)g(x)] = f'(x)g(x) + f(x)g'(x)"),
            ],
            examples: &[],
        },
        Topic {
            area: "mathematics",
            name: "geometry",
            concepts: &["angles", "triangles", "circles", "polygons", "3D shapes"],
            formulas: &[
                ("area of a triangle", "A = ½bh"),
                ("area of a circle", "A = πr²"),
                ("volume of a sphere", "V = (4/3)πr³"),
            ],
            examples: &[],
        },
    ],
};

pub(super) static SCIENCE: KnowledgeBase = KnowledgeBase {
    subject: Subject::Science,
    topics: &[
        Topic {
            area: "physics",
            name: "mechanics",
            concepts: &["Newton's Laws", "Conservation of Energy", "Conservation of Momentum"],
            formulas: &[
                ("force", "F = ma"),
                ("kinetic energy", "KE = ½mv²"),
                ("potential energy", "PE = mgh"),
                ("momentum", "p = mv"),
            ],
            examples: &[],
        },
        topic(
            "physics",
            "thermodynamics",
            &["Zeroth Law", "First Law", "Second Law", "Third Law", "heat", "temperature", "entropy", "work"],
        ),
        topic(
            "chemistry",
            "atomic structure",
            &[
                "protons",
                "neutrons",
                "electrons",
                "orbitals",
                "quantum numbers",
                "atomic radius",
                "ionization energy",
                "electronegativity",
            ],
        ),
        topic(
            "chemistry",
            "bonding",
            &["ionic", "covalent", "metallic", "hydrogen", "valence electrons", "Lewis structures", "VSEPR theory"],
        ),
        topic(
            "biology",
            "cell biology",
            &[
                "nucleus",
                "mitochondria",
                "ribosomes",
                "endoplasmic reticulum",
                "photosynthesis",
                "cellular respiration",
                "protein synthesis",
            ],
        ),
        topic(
            "biology",
            "genetics",
            &[
                "DNA",
                "RNA",
                "genes",
                "alleles",
                "chromosomes",
                "Mendel's Laws",
                "Law of Segregation",
                "Law of Independent Assortment",
            ],
        ),
    ],
};

pub(super) static ENGINEERING: KnowledgeBase = KnowledgeBase {
    subject: Subject::Engineering,
    topics: &[
        topic("mechanical", "statics", &["force analysis", "moment calculations", "equilibrium"]),
        topic("mechanical", "dynamics", &["kinematics", "kinetics", "energy methods"]),
        topic("mechanical", "materials", &["stress", "strain", "elasticity", "plasticity"]),
        topic("electrical", "circuits", &["Ohm's Law", "Kirchhoff's Laws", "AC/DC analysis"]),
        topic("electrical", "electronics", &["diodes", "transistors", "amplifiers", "digital circuits"]),
        topic("electrical", "power", &["generation", "transmission", "distribution"]),
        topic("civil", "structures", &["beams", "columns", "foundations", "load analysis"]),
        topic("civil", "construction materials", &["concrete", "steel", "timber", "composites"]),
        topic("civil", "design", &["codes", "standards", "safety factors"]),
    ],
};

pub(super) static LITERATURE: KnowledgeBase = KnowledgeBase {
    subject: Subject::Literature,
    topics: &[
        topic("genres", "fiction", &["novel", "short story", "drama", "poetry"]),
        topic("genres", "non-fiction", &["essay", "biography", "autobiography", "memoir"]),
        topic("genres", "academic writing", &["research paper", "thesis", "dissertation"]),
        topic(
            "elements",
            "plot",
            &["exposition", "rising action", "climax", "falling action", "resolution"],
        ),
        topic(
            "elements",
            "character",
            &["protagonist", "antagonist", "round", "flat", "dynamic", "static"],
        ),
        topic("elements", "theme", &["central idea", "universal truth", "message"]),
        topic("periods", "classical", &["Greek", "Roman", "Medieval"]),
        topic("periods", "renaissance", &["Elizabethan", "Baroque"]),
        topic("periods", "modern", &["Romanticism", "Realism", "Modernism", "Postmodernism"]),
    ],
};

pub(super) static HISTORY: KnowledgeBase = KnowledgeBase {
    subject: Subject::History,
    topics: &[
        topic(
            "ancient",
            "civilizations",
            &["Mesopotamia", "Egypt", "Greece", "Rome", "China", "India"],
        ),
        topic("ancient", "key events", &["Agricultural Revolution", "Bronze Age", "Iron Age"]),
        topic(
            "ancient",
            "figures",
            &["Hammurabi", "Alexander the Great", "Julius Caesar", "Confucius"],
        ),
        topic(
            "medieval",
            "periods",
            &["Early Middle Ages", "High Middle Ages", "Late Middle Ages"],
        ),
        topic("medieval", "events", &["Fall of Rome", "Crusades", "Black Death", "Renaissance"]),
        topic("medieval", "systems", &["Feudalism", "Manorialism", "Guild system"]),
        topic("modern", "revolutions", &["American", "French", "Industrial", "Russian"]),
        topic("modern", "wars", &["World War I", "World War II", "Cold War"]),
        topic(
            "modern",
            "movements",
            &["Enlightenment", "Romanticism", "Nationalism", "Imperialism"],
        ),
    ],
};

pub(super) static LANGUAGES: KnowledgeBase = KnowledgeBase {
    subject: Subject::Languages,
    topics: &[
        topic(
            "grammar",
            "parts of speech",
            &[
                "noun",
                "verb",
                "adjective",
                "adverb",
                "pronoun",
                "preposition",
                "conjunction",
                "interjection",
            ],
        ),
        topic("grammar", "sentence structure", &["subject", "predicate", "clause", "phrase"]),
        topic("grammar", "tenses", &["present", "past", "future", "perfect", "progressive"]),
        topic("writing", "styles", &["narrative", "descriptive", "expository", "persuasive"]),
        topic(
            "writing",
            "techniques",
            &["metaphor", "simile", "alliteration", "personification"],
        ),
        topic(
            "writing",
            "structure",
            &["introduction", "body", "conclusion", "thesis statement"],
        ),
        topic("communication", "speaking", &["pronunciation", "intonation", "fluency", "clarity"]),
        topic("communication", "listening", &["comprehension", "note-taking", "active listening"]),
        topic(
            "communication",
            "reading",
            &["skimming", "scanning", "critical reading", "analysis"],
        ),
    ],
};

pub(super) static ARTS: KnowledgeBase = KnowledgeBase {
    subject: Subject::Arts,
    topics: &[
        topic(
            "visual arts",
            "elements",
            &["line", "shape", "color", "texture", "space", "form", "value"],
        ),
        topic(
            "visual arts",
            "principles",
            &["balance", "contrast", "emphasis", "movement", "pattern", "rhythm", "unity"],
        ),
        topic(
            "visual arts",
            "media",
            &["painting", "sculpture", "drawing", "photography", "digital art"],
        ),
        topic("performing arts", "music", &["melody", "harmony", "rhythm", "timbre", "dynamics"]),
        topic("performing arts", "dance", &["technique", "choreography", "expression", "movement"]),
        topic("performing arts", "theater", &["acting", "directing", "stage design", "lighting"]),
        topic(
            "art history",
            "periods",
            &["Renaissance", "Baroque", "Romanticism", "Impressionism", "Modernism"],
        ),
        topic(
            "art history",
            "movements",
            &["Cubism", "Surrealism", "Abstract Expressionism", "Pop Art"],
        ),
    ],
};

pub(super) static BUSINESS: KnowledgeBase = KnowledgeBase {
    subject: Subject::Business,
    topics: &[
        topic("management", "functions", &["planning", "organizing", "leading", "controlling"]),
        topic(
            "management",
            "theories",
            &["Scientific Management", "Human Relations", "Systems Theory"],
        ),
        topic(
            "management",
            "skills",
            &["communication", "leadership", "decision-making", "problem-solving"],
        ),
        topic("marketing", "marketing mix", &["product", "price", "place", "promotion"]),
        topic("marketing", "strategies", &["segmentation", "targeting", "positioning"]),
        topic("marketing", "concepts", &["branding", "customer value", "market research"]),
        topic(
            "finance",
            "fundamentals",
            &["time value of money", "risk and return", "capital structure"],
        ),
        topic("finance", "tools", &["financial statements", "ratio analysis", "budgeting"]),
        topic("finance", "markets", &["stocks", "bonds", "derivatives", "foreign exchange"]),
    ],
};

pub(super) static COMPUTER_SCIENCE: KnowledgeBase = KnowledgeBase {
    subject: Subject::ComputerScience,
    topics: &[
        topic("programming", "languages", &["Python", "Java", "C++", "JavaScript", "SQL"]),
        topic(
            "programming",
            "paradigms",
            &["object-oriented", "functional", "procedural", "declarative"],
        ),
        topic(
            "programming",
            "core concepts",
            &["algorithms", "data structures", "recursion", "iteration"],
        ),
        topic("computer systems", "hardware", &["CPU", "memory", "storage", "networking"]),
        topic("computer systems", "software", &["operating systems", "databases", "compilers"]),
        topic(
            "computer systems",
            "architecture",
            &["client-server", "distributed", "cloud", "microservices"],
        ),
        topic(
            "algorithms",
            "sorting",
            &["bubble sort", "merge sort", "quick sort", "heap sort"],
        ),
        topic(
            "algorithms",
            "searching",
            &["linear search", "binary search", "hash tables"],
        ),
        topic(
            "algorithms",
            "complexity",
            &["big O notation", "time complexity", "space complexity"],
        ),
    ],
};

pub(super) static GENERAL: KnowledgeBase = KnowledgeBase {
    subject: Subject::General,
    topics: &[
        topic(
            "study skills",
            "techniques",
            &["active recall", "spaced repetition", "mind mapping", "summarization"],
        ),
        topic(
            "study skills",
            "time management",
            &["pomodoro technique", "time blocking", "priority matrix"],
        ),
        topic(
            "study skills",
            "note taking",
            &["cornell method", "outline method", "charting method"],
        ),
        topic(
            "critical thinking",
            "skills",
            &["analysis", "evaluation", "inference", "interpretation"],
        ),
        topic(
            "critical thinking",
            "fallacies",
            &["ad hominem", "straw man", "false dilemma", "appeal to authority"],
        ),
        topic(
            "critical thinking",
            "processes",
            &["problem identification", "solution generation", "evaluation"],
        ),
        topic(
            "communication",
            "verbal",
            &["clarity", "conciseness", "persuasion", "active listening"],
        ),
        topic("communication", "written", &["structure", "grammar", "style", "tone"]),
        topic(
            "communication",
            "presentation",
            &["visual aids", "body language", "audience engagement"],
        ),
    ],
};

pub(super) const MATHEMATICS_PATHS: [&[&str]; 3] = [
    &[
        "Basic arithmetic operations",
        "Introduction to algebra",
        "Geometry fundamentals",
        "Introduction to statistics",
    ],
    &[
        "Advanced algebra",
        "Trigonometry",
        "Pre-calculus",
        "Probability and statistics",
    ],
    &[
        "Calculus I and II",
        "Linear algebra",
        "Differential equations",
        "Advanced statistics",
    ],
];

pub(super) const SCIENCE_PATHS: [&[&str]; 3] = [
    &[
        "Scientific method",
        "Basic physics concepts",
        "Introduction to chemistry",
        "Cell biology basics",
    ],
    &[
        "Mechanics and thermodynamics",
        "Organic chemistry",
        "Genetics and evolution",
        "Earth science",
    ],
    &[
        "Quantum mechanics",
        "Biochemistry",
        "Molecular biology",
        "Environmental science",
    ],
];

pub(super) const PROGRAMMING_PATHS: [&[&str]; 3] = [
    &[
        "Programming fundamentals",
        "Basic syntax and data types",
        "Control structures",
        "Functions and modules",
    ],
    &[
        "Object-oriented programming",
        "Data structures",
        "Algorithms",
        "Database concepts",
    ],
    &[
        "Software engineering",
        "System design",
        "Machine learning",
        "Distributed systems",
    ],
];
