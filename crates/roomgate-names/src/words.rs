//! Word lists used to assemble room names.
//!
//! Every entry is a capitalised run of ASCII letters so that concatenating
//! any combination yields a readable CamelCase name with no separators.

pub(crate) const PLURAL_NOUNS: &[&str] = &[
    "Aliens", "Animals", "Antelopes", "Ants", "Apes", "Apples", "Baboons",
    "Bacteria", "Badgers", "Bananas", "Bats", "Bears", "Birds", "Bonobos",
    "Brides", "Bugs", "Bulls", "Butterflies", "Cheetahs", "Cherries",
    "Chicken", "Children", "Chimps", "Clowns", "Cows", "Creatures",
    "Dinosaurs", "Dogs", "Dolphins", "Donkeys", "Dragons", "Ducks",
    "Dwarfs", "Eagles", "Elephants", "Elves", "Fathers", "Fish", "Flowers",
    "Frogs", "Fruit", "Fungi", "Galaxies", "Geese", "Goats", "Gorillas",
    "Hedgehogs", "Hippos", "Horses", "Hunters", "Insects", "Kids",
    "Knights", "Lemons", "Lemurs", "Leopards", "Lions", "Lizards",
    "Martians", "Mice", "Monkeys", "Monsters", "Mushrooms", "Owls",
    "Parrots", "Peaches", "Pears", "Penguins", "Pigs", "Pirates", "Planets",
    "Plants", "Puppies", "Rabbits", "Rats", "Robots", "Seals", "Sharks",
    "Sheep", "Snakes", "Spiders", "Squirrels", "Stars", "Students",
    "Teachers", "Tigers", "Tomatoes", "Trees", "Vampires", "Whales",
    "Wolves", "Zebras",
];

pub(crate) const VERBS: &[&str] = &[
    "Are", "Attack", "Bake", "Beat", "Become", "Bend", "Bet", "Bite",
    "Blow", "Break", "Breed", "Bring", "Build", "Burn", "Buy", "Catch",
    "Celebrate", "Choose", "Climb", "Cook", "Create", "Cut", "Dance",
    "Decide", "Defeat", "Dig", "Draw", "Dream", "Drink", "Drive", "Eat",
    "Explain", "Explode", "Fall", "Feel", "Fight", "Find", "Fly", "Forget",
    "Gather", "Grow", "Hear", "Hide", "Hold", "Hunt", "Jump", "Kick",
    "Learn", "Lift", "Like", "Listen", "Love", "Make", "Meet", "Move",
    "Need", "Open", "Paint", "Play", "Pray", "Protest", "Read", "Remove",
    "Ride", "Ring", "Run", "Scream", "Sell", "Sing", "Sink", "Sit", "Sleep",
    "Smell", "Speak", "Spend", "Spin", "Steal", "Swim", "Swing", "Teach",
    "Think", "Throw", "Touch", "Understand", "Wait", "Walk", "Wear", "Win",
    "Wish", "Write",
];

pub(crate) const ADVERBS: &[&str] = &[
    "Abruptly", "Absently", "Accidentally", "Almost", "Angrily", "Anxiously",
    "Awkwardly", "Badly", "Blindly", "Boldly", "Bravely", "Briefly",
    "Brightly", "Busily", "Calmly", "Carefully", "Cautiously", "Cheerfully",
    "Clearly", "Closely", "Correctly", "Courageously", "Curiously",
    "Daintily", "Deliberately", "Doubtfully", "Eagerly", "Easily",
    "Elegantly", "Enormously", "Equally", "Eventually", "Exactly",
    "Faithfully", "Famously", "Fast", "Fatally", "Ferociously", "Fiercely",
    "Fondly", "Foolishly", "Fortunately", "Frankly", "Frantically",
    "Freely", "Gently", "Gladly", "Gracefully", "Greedily", "Happily",
    "Hastily", "Heavily", "Honestly", "Hopelessly", "Hungrily", "Innocently",
    "Joyously", "Kindly", "Lazily", "Loudly", "Madly", "Merrily", "Neatly",
    "Nervously", "Noisily", "Obediently", "Openly", "Patiently", "Politely",
    "Proudly", "Quickly", "Quietly", "Rapidly", "Rarely", "Really",
    "Recklessly", "Regularly", "Repeatedly", "Safely", "Seldom", "Sharply",
    "Shyly", "Silently", "Slowly", "Softly", "Solemnly", "Speedily",
    "Stealthily", "Suddenly", "Swiftly", "Tenderly", "Thankfully",
    "Tightly", "Truthfully", "Unexpectedly", "Victoriously", "Violently",
    "Warmly", "Wildly", "Wisely", "Yearly",
];

pub(crate) const ADJECTIVES: &[&str] = &[
    "Abundant", "Adorable", "Ambitious", "Ancient", "Angry", "Bitter",
    "Blue", "Brave", "Breezy", "Bright", "Brilliant", "Calm", "Careful",
    "Charming", "Cheerful", "Clever", "Clumsy", "Colossal", "Cool", "Crazy",
    "Curious", "Delightful", "Eager", "Elegant", "Enchanting", "Faithful",
    "Fancy", "Fierce", "Gentle", "Gigantic", "Glamorous", "Golden", "Grand",
    "Green", "Happy", "Helpful", "Huge", "Hungry", "Jolly", "Kind", "Large",
    "Lazy", "Little", "Lively", "Lucky", "Magnificent", "Mighty", "Modern",
    "Mysterious", "Nice", "Odd", "Old", "Polite", "Proud", "Purple", "Quick",
    "Quiet", "Rapid", "Red", "Round", "Shiny", "Short", "Silly", "Small",
    "Smooth", "Swift", "Tall", "Tender", "Thankful", "Tiny", "Victorious",
    "Vivid", "Wild", "Wise", "Witty", "Young", "Zealous",
];

pub(crate) const PLACES: &[&str] = &[
    "Airport", "Apartment", "Bakery", "Bank", "Beach", "Bridge", "Castle",
    "Cave", "Church", "City", "Desert", "Forest", "Garden", "Harbor",
    "Hospital", "Hotel", "Island", "Jungle", "Kitchen", "Library",
    "Lighthouse", "Market", "Meadow", "Moon", "Mountain", "Museum", "Ocean",
    "Palace", "Park", "Planet", "Prison", "River", "School", "Space",
    "Stadium", "Station", "Swamp", "Temple", "Theater", "Tower", "Valley",
    "Village", "Volcano", "Zoo",
];
