// SPDX-FileCopyrightText: 2026 LocalLocal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Direct answers from the simulated conversational model.
//!
//! [`DIRECT_RULES`] is scanned top to bottom; the first topic whose predicate
//! matches the normalized message supplies the answer. The final rule always
//! matches, so every input gets a reply.

use locallocal_core::ChoiceSource;
use strum::Display;

use crate::rules::{normalize, Predicate, Reply};

/// Topics the direct responder recognizes, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum DirectTopic {
    Greeting,
    UsStates,
    UsCapital,
    WorldPopulation,
    SpeedOfLight,
    TwoPlusTwo,
    Photosynthesis,
    Python,
    #[strum(serialize = "javascript")]
    JavaScript,
    Html,
    WorldWarTwo,
    MoonLanding,
    Dna,
    Weather,
    CurrentTime,
    Joke,
    Story,
    Help,
    Fallback,
}

/// One row of the direct-answer table.
#[derive(Debug, Clone, Copy)]
pub struct DirectRule {
    pub topic: DirectTopic,
    pub predicate: Predicate,
    pub reply: Reply,
}

/// Answer produced for a message, tagged with the topic that matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectResponse {
    pub topic: DirectTopic,
    pub text: String,
}

const AMERICA: Predicate = Predicate::ContainsAny(&["united states", "usa", "america"]);

/// Jokes served by the [`DirectTopic::Joke`] rule.
pub const JOKES: &[&str] = &[
    "Why don't scientists trust atoms? Because they make up everything!",
    "Why did the programmer quit his job? Because he didn't get arrays! (a raise)",
    "Why do programmers prefer dark mode? Because light attracts bugs!",
    "What's the best thing about Switzerland? I don't know, but the flag is a big plus.",
];

/// Prefix placed before every joke.
pub const JOKE_PREFIX: &str = "Here's a joke for you: ";

const HELP_TEXT: &str = concat!(
    "I can help you with many things! Here are some examples:\n",
    "• Answer factual questions (geography, science, history, math)\n",
    "• Explain concepts and provide definitions\n",
    "• Help with programming and technology questions\n",
    "• Provide creative content like jokes and stories\n",
    "• Give explanations about various topics\n",
    "• Assist with learning and understanding new subjects\n",
    "\n",
    "What would you like to know about?",
);

fn fallback(original: &str) -> String {
    format!(
        concat!(
            "I understand you're asking about '{}'. While I aim to be helpful, I might not have ",
            "specific information about this particular topic in my current knowledge base. \n",
            "\n",
            "Could you provide a bit more context or rephrase your question? ",
            "I'm knowledgeable about topics like:\n",
            "- Science and mathematics\n",
            "- Geography and history  \n",
            "- Technology and programming\n",
            "- General knowledge and facts\n",
            "\n",
            "I'm here to help with explanations, definitions, and answering questions ",
            "within my capabilities!",
        ),
        original
    )
}

/// The ordered direct-answer table. The last entry is the catch-all.
pub static DIRECT_RULES: &[DirectRule] = &[
    DirectRule {
        topic: DirectTopic::Greeting,
        predicate: Predicate::ContainsAny(&["hello", "hi", "hey", "good morning", "good afternoon"]),
        reply: Reply::Fixed(
            "Hello! I'm Gemma, an AI assistant. I'm here to help answer your questions, provide explanations, assist with coding, creative writing, and much more. What would you like to know?",
        ),
    },
    DirectRule {
        topic: DirectTopic::UsStates,
        predicate: Predicate::AllOf(&[Predicate::ContainsAny(&["states"]), AMERICA]),
        reply: Reply::Fixed(
            "The United States has 50 states. This has been the case since Hawaii became the 50th state in 1959. The states range from Alaska (the largest) to Rhode Island (the smallest by area), and each state has its own government while being part of the federal system.",
        ),
    },
    DirectRule {
        topic: DirectTopic::UsCapital,
        predicate: Predicate::AllOf(&[Predicate::ContainsAny(&["capital"]), AMERICA]),
        reply: Reply::Fixed(
            "The capital of the United States is Washington, D.C. (District of Columbia). It was established as the nation's capital in 1790 and is located between Maryland and Virginia along the Potomac River.",
        ),
    },
    DirectRule {
        topic: DirectTopic::WorldPopulation,
        predicate: Predicate::AllOf(&[
            Predicate::ContainsAny(&["population"]),
            Predicate::ContainsAny(&["world", "earth"]),
        ]),
        reply: Reply::Fixed(
            "The world population is approximately 8 billion people as of 2024. This number grows by roughly 70-80 million people per year, though the growth rate has been slowing in recent decades.",
        ),
    },
    DirectRule {
        topic: DirectTopic::SpeedOfLight,
        predicate: Predicate::ContainsAny(&["speed of light"]),
        reply: Reply::Fixed(
            "The speed of light in a vacuum is approximately 299,792,458 meters per second (or about 186,282 miles per second). This is one of the fundamental constants of physics and represents the maximum speed at which information can travel in the universe.",
        ),
    },
    DirectRule {
        topic: DirectTopic::TwoPlusTwo,
        predicate: Predicate::ContainsAny(&["2+2", "2 + 2", "two plus two"]),
        reply: Reply::Fixed(
            "2 + 2 equals 4. This is a basic arithmetic operation where we're adding two identical positive integers.",
        ),
    },
    DirectRule {
        topic: DirectTopic::Photosynthesis,
        predicate: Predicate::ContainsAny(&["photosynthesis"]),
        reply: Reply::Fixed(
            "Photosynthesis is the process by which plants and some bacteria convert light energy (usually from the sun) into chemical energy stored in glucose. The basic equation is: 6CO₂ + 6H₂O + light energy → C₆H₁₂O₆ + 6O₂. This process is crucial for life on Earth as it produces oxygen and forms the base of most food chains.",
        ),
    },
    DirectRule {
        topic: DirectTopic::Python,
        predicate: Predicate::AllOf(&[
            Predicate::ContainsAny(&["python"]),
            Predicate::ContainsAny(&["programming", "language", "code"]),
        ]),
        reply: Reply::Fixed(
            "Python is a high-level, interpreted programming language known for its simplicity and readability. Created by Guido van Rossum and first released in 1991, Python is widely used for web development, data science, artificial intelligence, automation, and many other applications. Its philosophy emphasizes code readability and simplicity.",
        ),
    },
    DirectRule {
        topic: DirectTopic::JavaScript,
        predicate: Predicate::ContainsAny(&["javascript"]),
        reply: Reply::Fixed(
            "JavaScript is a dynamic, high-level programming language primarily used for web development. It enables interactive web pages and is an essential part of web applications alongside HTML and CSS. JavaScript can also be used for server-side development (Node.js), mobile apps, and desktop applications.",
        ),
    },
    DirectRule {
        topic: DirectTopic::Html,
        predicate: Predicate::ContainsAny(&["html"]),
        reply: Reply::Fixed(
            "HTML (HyperText Markup Language) is the standard markup language for creating web pages. It uses tags to structure content, define elements like headings, paragraphs, links, and images. HTML provides the basic building blocks of web pages, which are then styled with CSS and made interactive with JavaScript.",
        ),
    },
    DirectRule {
        topic: DirectTopic::WorldWarTwo,
        predicate: Predicate::AllOf(&[
            Predicate::ContainsAny(&["world war"]),
            Predicate::ContainsAny(&["2", "two", "ii"]),
        ]),
        reply: Reply::Fixed(
            "World War II lasted from 1939 to 1945 and was the deadliest conflict in human history. It involved most of the world's nations and resulted in 70-85 million deaths. The war ended with the surrender of Germany in May 1945 and Japan in September 1945, following the atomic bombings of Hiroshima and Nagasaki.",
        ),
    },
    DirectRule {
        topic: DirectTopic::MoonLanding,
        predicate: Predicate::ContainsAny(&["moon landing"]),
        reply: Reply::Fixed(
            "The first human moon landing occurred on July 20, 1969, during NASA's Apollo 11 mission. Neil Armstrong and Buzz Aldrin became the first humans to walk on the Moon, while Michael Collins orbited above in the command module. Armstrong's famous words were: 'That's one small step for man, one giant leap for mankind.'",
        ),
    },
    DirectRule {
        topic: DirectTopic::Dna,
        predicate: Predicate::ContainsAny(&["dna"]),
        reply: Reply::Fixed(
            "DNA (Deoxyribonucleic Acid) is the hereditary material in most living organisms. It contains the genetic instructions for the development, functioning, and reproduction of all known living things. DNA is structured as a double helix and is composed of four nucleotide bases: Adenine (A), Thymine (T), Guanine (G), and Cytosine (C).",
        ),
    },
    DirectRule {
        topic: DirectTopic::Weather,
        predicate: Predicate::ContainsAny(&["weather", "temperature", "rain", "snow"]),
        reply: Reply::Fixed(
            "I don't have access to real-time weather data, but I can explain weather concepts! Weather is the atmospheric conditions at a specific place and time, including temperature, humidity, precipitation, wind, and atmospheric pressure. For current weather information, I'd recommend checking a weather service like weather.com or your local meteorological service.",
        ),
    },
    DirectRule {
        topic: DirectTopic::CurrentTime,
        predicate: Predicate::ContainsAny(&["what time", "current time"]),
        reply: Reply::Fixed(
            "I don't have access to real-time information, so I can't tell you the current time. However, you can check the time on your device's clock, or search 'current time' in your web browser to get the accurate local time.",
        ),
    },
    DirectRule {
        topic: DirectTopic::Joke,
        predicate: Predicate::ContainsAny(&["joke", "funny", "humor"]),
        reply: Reply::Pick {
            prefix: JOKE_PREFIX,
            pool: JOKES,
        },
    },
    DirectRule {
        topic: DirectTopic::Story,
        predicate: Predicate::ContainsAny(&["story", "tale"]),
        reply: Reply::Fixed(
            "Once upon a time, in a digital realm filled with endless possibilities, there lived an AI assistant who loved helping people learn and explore new ideas. Every question was an adventure, and every answer was a step toward greater understanding. What kind of story would you like me to help create or tell you about?",
        ),
    },
    DirectRule {
        topic: DirectTopic::Help,
        predicate: Predicate::ContainsAny(&["help", "assist", "what can you do"]),
        reply: Reply::Fixed(HELP_TEXT),
    },
    DirectRule {
        topic: DirectTopic::Fallback,
        predicate: Predicate::Always,
        reply: Reply::Echo(fallback),
    },
];

/// Answer `text` directly. Total: the catch-all rule guarantees a reply.
pub fn respond(text: &str, choice: &dyn ChoiceSource) -> DirectResponse {
    let normalized = normalize(text);
    let rule = DIRECT_RULES
        .iter()
        .find(|rule| rule.predicate.matches(&normalized))
        .unwrap_or(&DIRECT_RULES[DIRECT_RULES.len() - 1]);

    DirectResponse {
        topic: rule.topic,
        text: rule.reply.render(text, choice),
    }
}
