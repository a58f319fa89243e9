use super::content::{
    Accent, ContentError, Education, Experience, Portfolio, Profile, Project, SkillGroup,
    Specialization,
};

impl Portfolio {
    /// Build the static page content.
    pub fn load() -> Result<Self, ContentError> {
        let profile = Profile::new(
            "Donghao",
            "Zeng",
            "I love doing matrix multiplications.",
            &[
                "Computer Science student at McGill University crafting intelligent systems",
                "with LLMs, RL, and web technologies!",
            ],
            "mailto:t.donghao.zeng@gmail.com",
            "https://linkedin.com/in/donghao-zeng",
            "https://github.com/saintsauceee",
        )?;

        let education = Education::new(
            "McGill University",
            "Bachelor of Science in Computer Science (Honours)",
            "Expected Graduation: May 2027",
            "Montreal, Quebec, Canada",
        )?;

        let specializations = vec![
            Specialization::new(
                "Artificial Intelligence",
                "Large Language Models, Reinforcement Learning, Computer Vision, \
                 Multi-Agent Systems, Vector Databases",
                Accent::Cyan,
            )?,
            Specialization::new(
                "Software Engineering",
                "Full-Stack Development, Cloud Architecture, DevOps, \
                 Distributed Systems, API Design",
                Accent::Purple,
            )?,
        ];

        let experiences = vec![
            Experience::new(
                "Digitech Payments",
                "Software Developer Intern",
                "July 2025 – Aug. 2025",
                "Montreal, Canada",
                &[
                    "Architected ReAct LLM agent system for internal knowledge base and CRM operations using LangChain",
                    "Built automated PDF ingestion pipeline with text/image extraction, LLM chunking, and vector embeddings",
                    "Optimized pgvector similarity search with HNSW indexing and implemented LLM reranking for better retrieval",
                    "Engineered production-ready CI/CD pipeline with GitHub Actions and Docker containerization",
                ],
                Accent::Cyan,
            )?,
            Experience::new(
                "Group Imi",
                "Software Developer Intern",
                "July 2024 – May 2025",
                "Montreal, Canada",
                &[
                    "Developed web-based video editor with LLM copilot, demonstrated live to 15,000+ attendees at major tech conference",
                    "Designed and implemented 10+ table PostgreSQL schema with Row Level Security for multi-tenant access control",
                    "Built and deployed scalable FFmpeg video processing microservice on Google Cloud Run with auto-scaling",
                    "Integrated Stripe payment system with webhook handling for subscription management and billing automation",
                ],
                Accent::Purple,
            )?,
        ];

        let projects = vec![
            Project::new(
                "Reddit Deep Research",
                "Multi-agent LangGraph system with orchestrator, search/reader/writer agents. \
                 Real-time WebSocket streams for live research generation.",
                &["Python", "LangGraph", "MCP", "Next.js", "Express", "WebSockets"],
                &[
                    "Multi-agent orchestration",
                    "OAuth Reddit integration",
                    "Real-time streaming",
                    "Citation-backed research",
                ],
                Accent::Cyan,
            )?,
            Project::new(
                "LLM Math RL",
                "End-to-end reinforcement learning system achieving 22% accuracy boost on GSM8K \
                 with 30% faster training than PPO baseline.",
                &["Python", "PyTorch", "HuggingFace", "Reinforcement Learning", "GRPO"],
                &[
                    "22% accuracy improvement",
                    "30% training speedup",
                    "BERT-based verifier",
                    "CoT reasoning evaluation",
                ],
                Accent::Purple,
            )?,
            Project::new(
                "Biomedical Imaging Classification",
                "Deep learning pipeline achieving 92% accuracy through custom CNN architectures \
                 and ResNet50 fine-tuning with interpretability features.",
                &["Python", "PyTorch", "NumPy", "Computer Vision", "CNN"],
                &[
                    "92% classification accuracy",
                    "Custom CNN architecture",
                    "Class Activation Mapping",
                    "Medical image analysis",
                ],
                Accent::Blue,
            )?,
        ];

        let skills = vec![
            SkillGroup::new(
                "Programming Languages",
                &["Python", "Java", "Typescript", "JavaScript", "C", "C++"],
                Accent::Cyan,
            )?,
            SkillGroup::new(
                "Frontend",
                &["Next.js", "React", "HTML", "CSS", "Tailwind CSS", "Axios", "Vercel"],
                Accent::Yellow,
            )?,
            SkillGroup::new(
                "Backend",
                &["Node.js", "Express", "REST APIs", "Websockets", "SQL (PostgreSQL)"],
                Accent::Red,
            )?,
            SkillGroup::new(
                "AI/ML",
                &[
                    "PyTorch",
                    "HuggingFace Transformers",
                    "NumPy",
                    "Pandas",
                    "Scikit-Learn",
                    "NLTK",
                    "Matplotlib",
                    "Seaborn",
                ],
                Accent::Purple,
            )?,
            SkillGroup::new(
                "Cloud",
                &[
                    "Google Cloud Platform (Cloud Run, Storage, IAM)",
                    "AWS (EC2, S3)",
                ],
                Accent::Fuchsia,
            )?,
            SkillGroup::new(
                "Developer Tools",
                &["Linux/Unix", "Git", "Github Actions", "Docker", "Pytest"],
                Accent::Green,
            )?,
        ];

        Ok(Self {
            profile,
            education,
            specializations,
            experiences,
            projects,
            skills,
        })
    }
}
