//! Typed content records for the tour.
//!
//! Everything the sections display is plain configuration data: feature
//! cards, industry cards, contributor records, platform metadata,
//! provider names, the SYNTH sample records. Records are typed structs
//! validated once at load, not shape-checked at render time.

use anyhow::{Result, bail};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Hero {
    pub badge: &'static str,
    pub title: &'static str,
    pub accent: &'static str,
    pub tagline: &'static str,
    pub stats: &'static [Stat],
}

#[derive(Debug, Clone, Copy)]
pub struct Provider {
    pub name: &'static str,
    pub monogram: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

/// One SYNTH-format example, played back by the data-showcase panel.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SampleRecord {
    pub query: &'static str,
    pub reasoning: &'static str,
    pub answer: &'static str,
    pub model: &'static str,
    pub timestamp: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Samples {
    pub math: SampleRecord,
    pub medical: SampleRecord,
}

#[derive(Debug, Clone, Copy)]
pub struct ModelVariant {
    pub name: &'static str,
    pub description: &'static str,
    pub size: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ModelCard {
    pub name: &'static str,
    pub badge: &'static str,
    pub blurb: &'static str,
    pub stats: &'static [Stat],
    pub highlights: &'static [Feature],
    pub variants: &'static [ModelVariant],
}

#[derive(Debug, Clone, Copy)]
pub struct Industry {
    pub title: &'static str,
    pub description: &'static str,
    pub stats: &'static [&'static str],
}

/// A carousel panel. `art` names the text-art asset file loaded from the
/// art directory.
#[derive(Debug, Clone, Copy)]
pub struct Screenshot {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub art: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Platform {
    pub name: &'static str,
    pub description: &'static str,
    pub formats: &'static [&'static str],
    pub requirements: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Downloads {
    pub platforms: &'static [Platform],
    pub perks: &'static [&'static str],
    pub release_url: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Contributor {
    pub name: &'static str,
    pub username: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct DatasetLink {
    pub name: &'static str,
    pub detail: &'static str,
    pub url: &'static str,
}

/// Outbound navigation targets shown in the footer.
#[derive(Debug, Clone, Copy)]
pub struct Links {
    pub repo: &'static str,
    pub huggingface: &'static str,
    pub issues: &'static str,
    pub discussions: &'static str,
    pub privacy: &'static str,
    pub terms: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Content {
    pub hero: Hero,
    pub providers: &'static [Provider],
    pub features: &'static [Feature],
    /// What every SYNTH record carries, shown beside the sample panel.
    pub format_points: &'static [&'static str],
    pub samples: Samples,
    pub model: ModelCard,
    pub industries: &'static [Industry],
    pub screenshots: &'static [Screenshot],
    pub downloads: Downloads,
    pub contributors: &'static [Contributor],
    pub datasets: &'static [DatasetLink],
    pub links: Links,
}

impl Content {
    /// The built-in SynthLabs content set.
    pub fn builtin() -> Self {
        BUILTIN
    }

    /// Validates the content once at load so the sections never have to
    /// defend against empty or blank records.
    pub fn validate(&self) -> Result<()> {
        if self.features.is_empty() {
            bail!("content has no feature cards");
        }
        if self.industries.is_empty() {
            bail!("content has no industry cards");
        }
        if self.screenshots.is_empty() {
            bail!("content has no screenshot panels");
        }
        if self.providers.is_empty() {
            bail!("content has no providers");
        }
        if self.contributors.is_empty() {
            bail!("content has no contributors");
        }
        for feature in self.features {
            if feature.title.trim().is_empty() || feature.description.trim().is_empty() {
                bail!("feature card with blank title or description");
            }
        }
        for shot in self.screenshots {
            if shot.title.trim().is_empty() || shot.art.trim().is_empty() {
                bail!("screenshot panel '{}' missing title or art reference", shot.id);
            }
        }
        for sample in [&self.samples.math, &self.samples.medical] {
            if sample.query.trim().is_empty() || sample.reasoning.trim().is_empty() {
                bail!("sample record for model '{}' is incomplete", sample.model);
            }
        }
        Ok(())
    }
}

const MATH_REASONING: &str = "<think>
### 1. Query Parsing
The query describes a two-step problem:
- April sales: Sold clips to 48 friends → April = 48
- May sales: Sold half as many as April → May = (1/2) * April
- Target: Total clips sold → Total = April + May

### 2. Logical Derivation
Step 1: Calculate May sales
- May sales = April sales / 2 = 48 / 2 = 24 ✓

Step 2: Calculate total sales
- Total sales = April sales + May sales = 48 + 24 = 72 ✓

### 3. Conclusion
∴ Natalia sold a total of 72 clips altogether.
</think>";

const MEDICAL_REASONING: &str = "<think>
[Event] : LAD STEMI + PCI → [State] : Reperfused Ischemia ●
[T0 Echo] : ↓ EF + RWMA → [Implication] : Acute Dysfunction ◐
[T2wk Echo] : Normalized Function → [Observation] : Full Reversal ●
[Logic] : Reversal ≠ Infarction (Permanent) → [Exclude] : Necrosis/Scarring ↺
[Logic] : Reversal ≠ Hibernation (Chronic) → [Exclude] : Persistent Hypoperfusion ↺
[Constraint] : Recovery (2 weeks) → [Match] : Stunning Timeline (Days-Weeks) ●
∴ [Diagnosis] : Myocardial Stunning !
</think>";

const BUILTIN: Content = Content {
    hero: Hero {
        badge: "Open Source Synthetic Data Platform",
        title: "SYNTH",
        accent: "LABS",
        tagline: "Generate, convert and verify structured reasoning datasets for AI training.",
        stats: &[
            Stat { value: "100K+", label: "Samples Generated" },
            Stat { value: "3", label: "Generation Modes" },
            Stat { value: "3", label: "Platform Support" },
            Stat { value: "27+", label: "GitHub Stars" },
        ],
    },
    providers: &[
        Provider { name: "Gemini", monogram: "Gm", url: "https://ai.google.dev" },
        Provider { name: "Featherless", monogram: "Fl", url: "https://featherless.ai" },
        Provider { name: "OpenAI", monogram: "OA", url: "https://openai.com" },
        Provider { name: "Anthropic", monogram: "An", url: "https://www.anthropic.com" },
        Provider { name: "Qwen", monogram: "Qw", url: "https://qwen.ai" },
        Provider { name: "Kimi", monogram: "Km", url: "https://kimi.ai" },
        Provider { name: "Z.ai", monogram: "Z", url: "https://z.ai" },
        Provider { name: "OpenRouter", monogram: "OR", url: "https://openrouter.ai" },
        Provider { name: "Cerebras", monogram: "Cb", url: "https://www.cerebras.net" },
        Provider { name: "Together", monogram: "Tg", url: "https://www.together.ai" },
        Provider { name: "Groq", monogram: "Gq", url: "https://groq.com" },
        Provider { name: "Ollama", monogram: "Ol", url: "https://ollama.com" },
        Provider { name: "Chutes", monogram: "Ch", url: "https://chutes.ai" },
        Provider { name: "Hugging Face", monogram: "HF", url: "https://huggingface.co" },
    ],
    features: &[
        Feature {
            title: "Generator Mode",
            description: "Create synthetic datasets from scratch using AI-powered generation. Define topics, customize prompts, and generate high-quality reasoning traces in the SYNTH format.",
        },
        Feature {
            title: "Converter Mode",
            description: "Transform existing datasets into reasoning-enhanced formats. Full HuggingFace integration lets you search, preview, and convert public datasets with automatic reasoning trace generation.",
        },
        Feature {
            title: "DEEP Mode",
            description: "Multiple AI agents working together in sophisticated pipelines: Meta Agent, Retrieval Agent, Derivation Agent, Writer Agent, and Rewriter Agent for complex reasoning tasks.",
        },
        Feature {
            title: "Multi-turn Support",
            description: "Go beyond single Q&A pairs. Generate multi-turn conversations, let the model ask follow-up questions, and choose responders using SYNTH-style thinking.",
        },
        Feature {
            title: "Verifier View",
            description: "Quality control your generated data. Review and evaluate entries, remove duplicates automatically, assign ratings, and export only verified, high-quality data.",
        },
        Feature {
            title: "Cloud Integration",
            description: "Seamless Firebase/Firestore support. Download data directly as JSONL files in development mode, or upload to your Firestore database with one click in production mode.",
        },
    ],
    format_points: &[
        "Query parsing and decomposition",
        "Step-by-step logical derivation",
        "Verification and conclusion markers",
        "Metadata for provenance tracking",
    ],
    samples: Samples {
        math: SampleRecord {
            query: "Natalia sold clips to 48 of her friends in April, and then she sold half as many clips in May. How many clips did Natalia sell altogether in April and May?",
            reasoning: MATH_REASONING,
            answer: "72",
            model: "deepseek-v3.2",
            timestamp: "2026-01-15T18:13:08.654Z",
        },
        medical: SampleRecord {
            query: "What explains the transient cardiac dysfunction and subsequent recovery in the 53-year-old patient following LAD revascularization?",
            reasoning: MEDICAL_REASONING,
            answer: "The patient's condition is consistent with myocardial stunning. This phenomenon occurs when heart muscle tissue experiences transient, reversible dysfunction following a period of ischemia, even after blood flow has been successfully restored via PCI.",
            model: "glm-4.7",
            timestamp: "2026-01-20T14:22:31.123Z",
        },
    },
    model: ModelCard {
        name: "GLM-4.7-Flash-SynthLabs",
        badge: "First of Its Kind",
        blurb: "The first model trained on SynthLabs data at this scale, featuring SYNTH-style reasoning and optimized for synthetic data generation tasks.",
        stats: &[
            Stat { value: "31B", label: "Parameters" },
            Stat { value: "GLM4 Light MoE", label: "Architecture" },
            Stat { value: "LoRA", label: "Training Method" },
            Stat { value: "2000+", label: "Downloads" },
        ],
        highlights: &[
            Feature {
                title: "SYNTH-Style Reasoning",
                description: "First model trained on SynthLabs data at this scale with structured reasoning traces.",
            },
            Feature {
                title: "Unsloth Optimized",
                description: "Trained with Unsloth and HuggingFace TRL library for efficient fine-tuning.",
            },
            Feature {
                title: "Multi-Format Support",
                description: "Available in full precision, GGUF, and REAP-25 variants for different use cases.",
            },
        ],
        variants: &[
            ModelVariant {
                name: "Full Precision",
                description: "Original BF16/F32 model for maximum quality",
                size: "31B params",
                url: "https://huggingface.co/mkurman/GLM-4.7-Flash-SynthLabs",
            },
            ModelVariant {
                name: "GGUF",
                description: "Quantized versions for local inference",
                size: "Various quantization levels",
                url: "https://huggingface.co/mkurman/GLM-4.7-Flash-SynthLabs-GGUF",
            },
            ModelVariant {
                name: "REAP-25",
                description: "Optimized for reasoning and analysis",
                size: "Pruned to 23B using Cerebras REAP",
                url: "https://huggingface.co/mkurman/GLM-4.7-Flash-SynthLabs-REAP-25",
            },
        ],
    },
    industries: &[
        Industry {
            title: "Healthcare",
            description: "Generate synthetic patient data for medical AI training while maintaining HIPAA compliance. Create diverse clinical scenarios for diagnostic model development.",
            stats: &["1.8K+ Medical Q&A Pairs", "Clinical Reasoning Traces", "HIPAA Compliant"],
        },
        Industry {
            title: "Finance",
            description: "Create synthetic trading scenarios for risk models, automate test suites for regulatory reporting, and train specialized judge models for transaction monitoring.",
            stats: &["Risk Assessment Data", "Regulatory Compliance", "Fraud Detection"],
        },
        Industry {
            title: "Education",
            description: "Transform educational content into structured reasoning datasets. Generate step-by-step explanations for complex concepts and create adaptive learning materials.",
            stats: &["7K+ Math Problems", "Step-by-Step Reasoning", "Adaptive Learning"],
        },
        Industry {
            title: "Enterprise",
            description: "Transform SOPs into comprehensive training datasets. Generate user interaction scenarios for testing automation and build custom verifier models for quality assurance.",
            stats: &["SOP Automation", "QA Testing Data", "Custom Verifiers"],
        },
        Industry {
            title: "Research",
            description: "Accelerate scientific discovery with synthetic experimental data. Generate hypotheses, simulate outcomes, and create training data for research-specific AI models.",
            stats: &["Experimental Data", "Hypothesis Generation", "Outcome Simulation"],
        },
        Industry {
            title: "Legal",
            description: "Generate synthetic legal documents and case studies for training AI assistants. Create diverse legal scenarios while maintaining confidentiality and compliance.",
            stats: &["Legal Document Synthesis", "Case Study Generation", "Compliance Training"],
        },
    ],
    screenshots: &[
        Screenshot {
            id: "creator",
            title: "Creator Mode",
            subtitle: "Streaming Responses",
            description: "Watch your data come to life in real-time. The Creator mode streams reasoning traces as they are generated, giving you instant feedback on the AI thought process.",
            features: &["Live Feed", "Real-time Generation", "Stenographic Traces"],
            art: "creator.txt",
        },
        Screenshot {
            id: "verifier-edit",
            title: "Verifier Mode",
            subtitle: "Edit & Review",
            description: "Take full control of your generated data. Edit reasoning traces, rate quality, and curate the perfect dataset for your training needs.",
            features: &["Manual Editing", "Quality Rating", "Batch Operations"],
            art: "verifier-edit.txt",
        },
        Screenshot {
            id: "verifier-assistant",
            title: "Verifier Mode",
            subtitle: "AI Assistant",
            description: "Let the AI help you verify and improve your data. The Data Assistant analyzes entries, identifies issues, and suggests improvements automatically.",
            features: &["Auto Analysis", "Issue Detection", "Smart Suggestions"],
            art: "verifier-assistant.txt",
        },
    ],
    downloads: Downloads {
        platforms: &[
            Platform {
                name: "macOS",
                description: "For Intel & Apple Silicon",
                formats: &["DMG", "ZIP"],
                requirements: "macOS 10.15+",
            },
            Platform {
                name: "Windows",
                description: "For Windows 10 & 11",
                formats: &["NSIS Installer", "Portable"],
                requirements: "Windows 10+",
            },
            Platform {
                name: "Linux",
                description: "For all distributions",
                formats: &["AppImage", "DEB"],
                requirements: "Any modern distro",
            },
        ],
        perks: &[
            "Native desktop experience",
            "Faster local processing",
            "Secure API key storage",
        ],
        release_url: "https://github.com/mkurman/synthlabs/releases",
    },
    contributors: &[
        Contributor {
            name: "Mariusz Kurman",
            username: "mkurman",
            role: "Creator & Lead Developer",
        },
        Contributor {
            name: "Yamahammer",
            username: "Yamahammer",
            role: "Contributor",
        },
    ],
    datasets: &[
        DatasetLink {
            name: "GSM8K-SynthLabs",
            detail: "7K examples",
            url: "https://huggingface.co/datasets/mkurman/gsm8k-SynthLabs-reasoning",
        },
        DatasetLink {
            name: "Medical-SYNTH",
            detail: "1.8K examples",
            url: "https://huggingface.co/datasets/mkurman/medical-SYNTH-reasoning-preview",
        },
    ],
    links: Links {
        repo: "https://github.com/mkurman/synthlabs",
        huggingface: "https://huggingface.co/mkurman",
        issues: "https://github.com/mkurman/synthlabs/issues",
        discussions: "https://github.com/mkurman/synthlabs/discussions",
        privacy: "https://github.com/mkurman/synthlabs/blob/main/PRIVACY.md",
        terms: "https://github.com/mkurman/synthlabs/blob/main/TERMS.md",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_content_is_valid() {
        Content::builtin().validate().expect("builtin content");
    }

    #[test]
    fn test_empty_features_rejected() {
        let mut content = Content::builtin();
        content.features = &[];
        let err = content.validate().expect_err("must reject");
        assert!(err.to_string().contains("feature"));
    }

    #[test]
    fn test_sample_records_serialize_to_json() {
        let json = serde_json::to_string_pretty(&Content::builtin().samples.math)
            .expect("serialize sample");
        assert!(json.contains("\"query\""));
        assert!(json.contains("\"answer\": \"72\""));
    }
}
